//! User Dashboard Page
//!
//! Asset cards, an add/details modal with image upload, and a verification
//! modal. The workflow and modal state live in the shared `UserDashboard`;
//! this page copies that state into signals after every action.

use leptos::*;
use std::sync::Arc;

use assetboard::{Account, Asset, AssetModal, AssetSubmission, UserDashboard as Workflow, VerifyModal};

use crate::api::GlooAssetApi;
use crate::components::{AssetCard, AssetDetails, AssetForm, Modal};
use crate::state::global::GlobalState;

/// Account used when none was entered on the landing page
const DEFAULT_USER_ACCOUNT: &str = "dummyAccount";

/// Signal copies of the workflow state
#[derive(Clone, Copy)]
struct Mirror {
    assets: RwSignal<Vec<Asset>>,
    add_modal: RwSignal<AssetModal>,
    verify_modal: RwSignal<VerifyModal>,
}

impl Mirror {
    fn new() -> Self {
        Self {
            assets: create_rw_signal(Vec::new()),
            add_modal: create_rw_signal(AssetModal::default()),
            verify_modal: create_rw_signal(VerifyModal::default()),
        }
    }

    fn sync(&self, workflow: &Workflow) {
        set_if_changed(self.assets, workflow.assets());
        set_if_changed(self.add_modal, workflow.add_modal());
        set_if_changed(self.verify_modal, workflow.verify_modal());
    }
}

/// Write only when the value differs, so views reading the signal keep
/// their local state across actions that change nothing
fn set_if_changed<T: PartialEq>(signal: RwSignal<T>, value: T) {
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}

#[component]
pub fn UserDashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let workflow = store_value(Workflow::new(
        Arc::new(GlooAssetApi::from_storage()),
        Arc::new(state.notifier()),
        Account::default(),
    ));
    let mirror = Mirror::new();

    // Apply a synchronous modal change and refresh the signals
    let act = move |f: &dyn Fn(&Workflow)| {
        workflow.with_value(|w| {
            f(w);
            mirror.sync(w);
        });
    };

    create_effect(move |_| {
        let account = state.account_or(DEFAULT_USER_ACCOUNT);
        let workflow = workflow.get_value();
        spawn_local(async move {
            workflow.set_account(account).await;
            mirror.sync(&workflow);
        });
    });

    let submit = Callback::new(move |submission: AssetSubmission| {
        let workflow = workflow.get_value();
        spawn_local(async move {
            workflow.submit(&submission).await;
            mirror.sync(&workflow);
        });
    });

    let verify = move |_| {
        let workflow = workflow.get_value();
        spawn_local(async move {
            workflow.verify().await;
            mirror.sync(&workflow);
        });
    };

    // The add form is rebuilt only when the modal actually changes state
    let add_modal = create_memo(move |_| mirror.add_modal.get());

    let select = Callback::new(move |asset: Asset| {
        act(&|w| w.view_asset_details(asset.clone()));
    });

    view! {
        <div class="container mx-auto max-w-4xl mt-8 p-4 border-2 border-teal-900 bg-teal-800 rounded shadow-md">
            <h1 class="text-3xl font-bold text-center mb-4">"User Dashboard"</h1>

            <div class="mb-6 p-4 bg-teal-600 rounded">
                <h2 class="text-2xl font-semibold">"Welcome!"</h2>
                <p class="text-xl">
                    {move || format!("Account: {}", state.account_or(DEFAULT_USER_ACCOUNT))}
                </p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                <For
                    each=move || mirror.assets.get()
                    key=|asset| asset.asset_id.clone()
                    children=move |asset| view! { <AssetCard asset=asset on_select=select /> }
                />
            </div>

            <div class="text-center mt-6 grid grid-cols-2 gap-2">
                <button
                    class="px-4 py-2 rounded bg-teal-600 text-white"
                    on:click=move |_| act(&|w| w.open_add_modal())
                >
                    "Add Asset"
                </button>
                <button
                    class="px-4 py-2 rounded bg-teal-600 text-white"
                    on:click=move |_| act(&|w| w.open_verify_modal())
                >
                    "Verify Asset"
                </button>
            </div>

            <Modal
                open=Signal::derive(move || add_modal.with(AssetModal::is_open))
                on_close=move |_| act(&|w| w.close_add_modal())
            >
                {move || match add_modal.with(|m| m.selected_asset().cloned()) {
                    Some(asset) => view! { <AssetDetails asset=asset /> }.into_view(),
                    None => view! {
                        <h2 class="font-semibold text-xl mb-4">"Add Asset"</h2>
                        <AssetForm with_image=true on_submit=submit />
                    }
                    .into_view(),
                }}
            </Modal>

            <Modal
                open=Signal::derive(move || mirror.verify_modal.with(VerifyModal::is_open))
                on_close=move |_| act(&|w| w.close_verify_modal())
            >
                <h2 class="font-semibold text-xl mb-4">"Verify Asset"</h2>
                <input
                    type="text"
                    placeholder="Enter Token ID"
                    class="w-full p-2 mb-4 bg-gray-200 rounded outline-none"
                    prop:value=move || mirror.verify_modal.with(|m| m.token().to_string())
                    on:input=move |ev| {
                        let token = event_target_value(&ev);
                        act(&|w| w.set_verify_token(token.clone()));
                    }
                />
                <button
                    class="px-4 py-2 mb-4 rounded bg-teal-600 text-white w-full"
                    on:click=verify
                >
                    "Verify"
                </button>
                {move || {
                    mirror
                        .verify_modal
                        .with(|m| m.verified_asset().cloned())
                        .map(|asset| view! { <AssetDetails asset=asset /> })
                }}
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_unchanged_modal_does_not_rebuild_form() {
        let runtime = create_runtime();

        let modal = create_rw_signal(AssetModal::default());
        let rebuilds = Rc::new(Cell::new(0));
        create_isomorphic_effect({
            let rebuilds = rebuilds.clone();
            move |_| {
                modal.with(|_| ());
                rebuilds.set(rebuilds.get() + 1);
            }
        });
        assert_eq!(rebuilds.get(), 1);

        set_if_changed(modal, AssetModal::OpenForAdd);
        assert_eq!(rebuilds.get(), 2);

        // A rejected submit or a finished fetch leaves the modal as it was
        set_if_changed(modal, AssetModal::OpenForAdd);
        set_if_changed(modal, AssetModal::OpenForAdd);
        assert_eq!(rebuilds.get(), 2);

        set_if_changed(modal, AssetModal::Closed);
        assert_eq!(rebuilds.get(), 3);

        runtime.dispose();
    }
}
