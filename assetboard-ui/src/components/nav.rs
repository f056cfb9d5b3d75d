//! Navigation Component
//!
//! Header navigation bar with brand and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-teal-900 border-b border-teal-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold text-white">"Assetboard"</A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/dashboard" label="Owner" />
                        <NavLink href="/userdashboard" label="User" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-teal-100 hover:text-white hover:bg-teal-700 transition-colors"
            active_class="bg-teal-700 text-white"
        >
            {label}
        </A>
    }
}
