//! Read-only view of a single asset

use leptos::*;

use assetboard::Asset;

#[component]
pub fn AssetDetails(asset: Asset) -> impl IntoView {
    let status = approval_label(asset.approval_status);

    view! {
        <div class="space-y-2">
            <h2 class="font-semibold text-xl">{asset.display_name().to_string()}</h2>
            {asset.image_url.clone().map(|src| view! {
                <img src=src class="w-full h-48 object-cover rounded" />
            })}
            <dl class="grid grid-cols-3 gap-1 text-sm">
                <dt class="text-gray-500">"Asset ID"</dt>
                <dd class="col-span-2">{asset.asset_id.clone()}</dd>
                <dt class="text-gray-500">"Type"</dt>
                <dd class="col-span-2">{asset.asset_type.to_string()}</dd>
                <dt class="text-gray-500">"Description"</dt>
                <dd class="col-span-2">{asset.description.clone().unwrap_or_default()}</dd>
                {status.map(|label| view! {
                    <dt class="text-gray-500">"Status"</dt>
                    <dd class="col-span-2">{label}</dd>
                })}
            </dl>
        </div>
    }
}

/// Label for the approval flag; `None` when the backend did not report one
pub fn approval_label(status: Option<bool>) -> Option<&'static str> {
    status.map(|approved| if approved { "Approved" } else { "Pending approval" })
}
