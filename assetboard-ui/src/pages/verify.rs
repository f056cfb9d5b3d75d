//! Verify Page
//!
//! Looks up the asset named in the URL.

use leptos::*;
use leptos_router::*;
use std::sync::Arc;

use assetboard::{Account, Asset, AssetBoard, SubmissionEncoding};

use crate::api::GlooAssetApi;
use crate::components::AssetDetails;
use crate::state::global::GlobalState;

#[component]
pub fn VerifyAsset() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let params = use_params_map();

    let board = store_value(AssetBoard::new(
        Arc::new(GlooAssetApi::from_storage()),
        Arc::new(state.notifier()),
        Account::default(),
        SubmissionEncoding::Json,
    ));
    let asset_id = move || params.with(|p| p.get("asset_id").cloned().unwrap_or_default());
    let verified = create_rw_signal(None::<Asset>);
    let (loading, set_loading) = create_signal(false);

    create_effect(move |_| {
        let token = asset_id();
        let board = board.get_value();
        set_loading.set(true);
        spawn_local(async move {
            // A failed lookup keeps the last verified asset on screen
            if let Some(asset) = board.verify(&token).await {
                verified.set(Some(asset));
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-lg mx-auto bg-white text-gray-900 rounded-xl p-6 space-y-4">
            <h1 class="text-2xl font-bold">{move || format!("Verify asset {}", asset_id())}</h1>
            {move || {
                if loading.get() {
                    view! { <p class="text-gray-500">"Verifying..."</p> }.into_view()
                } else {
                    match verified.get() {
                        Some(asset) => view! { <AssetDetails asset=asset /> }.into_view(),
                        None => view! {
                            <p class="text-red-600">"This asset could not be verified."</p>
                        }
                        .into_view(),
                    }
                }
            }}
        </div>
    }
}
