//! Modal container
//!
//! Generic overlay hosting arbitrary content. Clicking the backdrop or the
//! close button calls `on_close`; the caller owns the open state.

use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center bg-black/60"
                on:click=move |_| on_close.call(())
            >
                <div
                    class="relative w-full max-w-lg bg-white text-gray-900 rounded-xl p-6 shadow-xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-3 right-3 text-gray-500 hover:text-gray-900"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
