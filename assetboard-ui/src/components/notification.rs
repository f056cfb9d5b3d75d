//! Notification Banner
//!
//! Renders the root notification slot. Stateless apart from the dismiss
//! button, which empties the slot.

use leptos::*;

use assetboard::{Notification, NotificationKind};

use crate::state::global::GlobalState;

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed top-20 right-4 z-50">
            {move || {
                state.notification.get().map(|notification| view! {
                    <Banner notification=notification on_dismiss=move |_| state.dismiss() />
                })
            }}
        </div>
    }
}

#[component]
fn Banner(
    notification: Notification,
    #[prop(into)]
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let (icon, bg_class) = banner_style(notification.kind);

    view! {
        <div
            role="alert"
            class=format!(
                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p class="text-sm font-medium">{notification.message}</p>
                {notification.detail.map(|detail| view! {
                    <p class="text-xs opacity-80">{detail}</p>
                })}
                <p class="text-xs opacity-60">
                    {notification.raised_at.format("%H:%M:%S").to_string()}
                </p>
            </div>
            <button
                class="text-white/80 hover:text-white"
                on:click=move |_| on_dismiss.call(())
            >
                "×"
            </button>
        </div>
    }
}

fn banner_style(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Success => ("✓", "bg-green-600"),
        NotificationKind::Error => ("✕", "bg-red-600"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_style() {
        assert_eq!(banner_style(NotificationKind::Success).1, "bg-green-600");
        assert_eq!(banner_style(NotificationKind::Error).1, "bg-red-600");
    }
}
