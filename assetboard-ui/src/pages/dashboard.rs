//! Owner Dashboard Page
//!
//! Lists the owner's assets with approval status and mint actions, followed
//! by one submission form per category.

use leptos::*;
use std::sync::Arc;

use assetboard::{Account, Asset, AssetContract, AssetSubmission, OwnerDashboard};

use crate::api::{GlooAssetApi, HostContract};
use crate::components::{AssetForm, AssetList};
use crate::state::global::GlobalState;

/// Account used when none was entered on the landing page
const DEFAULT_OWNER_ACCOUNT: &str = "0xYourEthereumAccount";

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    // Without a host contract every mint fails with the usual notification
    let contract = HostContract::from_window()
        .map(|contract| Arc::new(contract) as Arc<dyn AssetContract>);
    let dashboard = store_value(OwnerDashboard::new(
        Arc::new(GlooAssetApi::from_storage()),
        Arc::new(state.notifier()),
        Account::default(),
        contract,
    ));
    let assets = create_rw_signal(Vec::<Asset>::new());

    // Fetch on mount and whenever the account changes
    create_effect(move |_| {
        let account = state.account_or(DEFAULT_OWNER_ACCOUNT);
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.set_account(account).await;
            assets.set(dashboard.assets());
        });
    });

    let submit = Callback::new(move |submission: AssetSubmission| {
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.submit(&submission).await;
            assets.set(dashboard.assets());
        });
    });

    let mint = Callback::new(move |asset: Asset| {
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.mint(&asset).await;
            assets.set(dashboard.assets());
        });
    });

    let forms = dashboard.with_value(|d| d.form_types().to_vec());

    view! {
        <div class="container mx-auto max-w-lg border-2 border-blue-900 p-4 rounded shadow-md space-y-4">
            <h1 class="text-3xl font-bold text-center">"Your Assets"</h1>
            <p class="text-center text-sm text-teal-100">
                {move || state.account_or(DEFAULT_OWNER_ACCOUNT).to_string()}
            </p>

            <AssetList assets=assets on_mint=mint />

            <h2 class="font-semibold text-xl">"Add new asset"</h2>
            {forms
                .into_iter()
                .map(|kind| view! { <AssetForm asset_type=kind on_submit=submit /> })
                .collect_view()}
        </div>
    }
}
