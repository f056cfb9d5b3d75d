//! Asset list for the owner dashboard
//!
//! One row per asset with its approval status and a mint action.

use leptos::*;

use assetboard::Asset;

use super::asset_details::approval_label;

#[component]
pub fn AssetList(
    #[prop(into)]
    assets: Signal<Vec<Asset>>,
    #[prop(into)]
    on_mint: Callback<Asset>,
) -> impl IntoView {
    view! {
        <div class="my-4">
            <Show
                when=move || !assets.with(Vec::is_empty)
                fallback=|| view! { <p class="text-teal-100">"No assets yet."</p> }
            >
                <ul class="divide-y divide-teal-700">
                    <For
                        each=move || assets.get()
                        key=|asset| asset.asset_id.clone()
                        children=move |asset| {
                            let label = approval_label(asset.approval_status).unwrap_or("-");
                            let for_mint = asset.clone();
                            view! {
                                <li class="flex items-center justify-between py-2">
                                    <span>
                                        {format!("{} #{}", asset.asset_type, asset.asset_id)}
                                    </span>
                                    <span class="text-sm text-teal-100">{label}</span>
                                    <button
                                        class="px-3 py-1 rounded bg-blue-700 hover:bg-blue-800"
                                        on:click=move |_| on_mint.call(for_mint.clone())
                                    >
                                        "Mint"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
