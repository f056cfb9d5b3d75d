//! Landing Page
//!
//! Pick the account to act as and the backend to talk to.

use leptos::*;
use leptos_router::*;

use assetboard::Account;

use crate::api;
use crate::state::global::GlobalState;

#[component]
pub fn Landing() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let (account, set_account) = create_signal(state.account.get_untracked().to_string());
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save = move |_| {
        api::set_api_base(&api_url.get());
        state.account.set(Account::new(account.get().trim()));
    };

    view! {
        <div class="max-w-xl mx-auto space-y-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold">"Assetboard"</h1>
                <p class="text-teal-100 mt-2">
                    "Register certificates, products, land and vehicles, and verify them by token id."
                </p>
            </div>

            <section class="bg-teal-800 rounded-xl p-6 space-y-4">
                <div>
                    <label class="block text-sm text-teal-100 mb-2">"Account"</label>
                    <input
                        type="text"
                        placeholder="0x..."
                        prop:value=move || account.get()
                        on:input=move |ev| set_account.set(event_target_value(&ev))
                        class="w-full bg-teal-700 rounded-lg px-4 py-3 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-teal-100 mb-2">"Backend URL"</label>
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="w-full bg-teal-700 rounded-lg px-4 py-3 focus:outline-none"
                    />
                </div>
                <button
                    on:click=save
                    class="w-full px-4 py-3 bg-teal-900 hover:bg-teal-950 rounded-lg font-medium"
                >
                    "Save"
                </button>
            </section>

            <div class="grid grid-cols-2 gap-4">
                <A href="/dashboard" class="block text-center px-4 py-3 bg-blue-800 rounded-lg">
                    "Owner dashboard"
                </A>
                <A href="/userdashboard" class="block text-center px-4 py-3 bg-blue-800 rounded-lg">
                    "User dashboard"
                </A>
            </div>
        </div>
    }
}
