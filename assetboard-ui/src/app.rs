//! App Root Component
//!
//! Routing plus the root-owned notification slot.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, NotificationBanner};
use crate::pages::{Dashboard, Landing, UserDashboard, VerifyAsset};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-teal-600 text-white flex flex-col">
                <Nav />

                <NotificationBanner />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/verify/:asset_id" view=VerifyAsset />
                        <Route path="/userdashboard" view=UserDashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer showing the active account and backend
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-teal-900 border-t border-teal-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-teal-200">
                    {move || {
                        let account = state.account.get();
                        if account.is_empty() {
                            "No account selected".to_string()
                        } else {
                            format!("Account: {}", account)
                        }
                    }}
                </div>
                <div class="text-teal-300">{crate::api::get_api_base()}</div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-teal-100 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-teal-800 hover:bg-teal-900 rounded-lg font-medium transition-colors"
            >
                "Go to Start"
            </A>
        </div>
    }
}
