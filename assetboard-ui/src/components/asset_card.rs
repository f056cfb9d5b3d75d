//! Asset card shown on the user dashboard

use leptos::*;

use assetboard::Asset;

#[component]
pub fn AssetCard(
    asset: Asset,
    #[prop(into)]
    on_select: Callback<Asset>,
) -> impl IntoView {
    let name = asset.display_name().to_string();
    let kind = asset.asset_type.to_string();
    let image = asset.image_url.clone();
    let description = asset.description.clone();

    view! {
        <div
            class="p-4 bg-white text-gray-900 rounded shadow hover:bg-gray-200 cursor-pointer"
            on:click=move |_| on_select.call(asset.clone())
        >
            {image.map(|src| view! {
                <img src=src alt=name.clone() class="w-full h-32 object-cover rounded mb-4" />
            })}
            <h3 class="text-lg font-semibold">{name.clone()}</h3>
            <p class="text-sm text-gray-600">{kind}</p>
            {description.map(|text| view! { <p class="text-sm text-gray-600">{text}</p> })}
        </div>
    }
}
