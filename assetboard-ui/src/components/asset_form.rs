//! Asset Form Component
//!
//! Collects an asset id, optional name and description, and, when enabled,
//! an image. The category is either fixed by the caller or picked from a
//! select. Nothing is validated before handing the submission over.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use assetboard::{AssetSubmission, AssetType, ImageAttachment};

#[component]
pub fn AssetForm(
    /// Fixed category; a select is shown when absent
    #[prop(optional)]
    asset_type: Option<AssetType>,
    /// Offer an image upload
    #[prop(optional)]
    with_image: bool,
    #[prop(into)]
    on_submit: Callback<AssetSubmission>,
) -> impl IntoView {
    let fixed_type = asset_type.clone();
    let (selected_type, set_selected_type) = create_signal(
        asset_type.unwrap_or(AssetType::Certificate).to_string(),
    );
    let (asset_id, set_asset_id) = create_signal(String::new());
    let (asset_name, set_asset_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let image = create_rw_signal(None::<ImageAttachment>);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(build_submission(
            &selected_type.get(),
            &asset_id.get(),
            &asset_name.get(),
            &description.get(),
            image.get(),
        ));
    };

    let handle_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => read_image(file, image),
            None => image.set(None),
        }
    };

    let title = fixed_type
        .as_ref()
        .map(|kind| format!("{} asset", kind))
        .unwrap_or_else(|| "New asset".to_string());

    view! {
        <form class="space-y-3 p-4 bg-teal-700 rounded-lg" on:submit=handle_submit>
            <h3 class="font-semibold">{title}</h3>

            {fixed_type.is_none().then(|| view! {
                <select
                    class="w-full p-2 bg-gray-200 text-gray-900 rounded"
                    on:change=move |ev| set_selected_type.set(event_target_value(&ev))
                >
                    {AssetType::selectable()
                        .iter()
                        .map(|kind| {
                            let value = kind.to_string();
                            view! { <option value=value.clone()>{value.clone()}</option> }
                        })
                        .collect_view()}
                </select>
            })}

            <input
                type="text"
                placeholder="Asset ID"
                class="w-full p-2 bg-gray-200 text-gray-900 rounded"
                prop:value=move || asset_id.get()
                on:input=move |ev| set_asset_id.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Asset name"
                class="w-full p-2 bg-gray-200 text-gray-900 rounded"
                prop:value=move || asset_name.get()
                on:input=move |ev| set_asset_name.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                class="w-full p-2 bg-gray-200 text-gray-900 rounded"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            {with_image.then(|| view! {
                <input
                    type="file"
                    accept="image/*"
                    class="w-full text-sm"
                    on:change=handle_file
                />
            })}

            <button type="submit" class="w-full px-4 py-2 rounded bg-teal-900 hover:bg-teal-950 text-white">
                "Submit"
            </button>
        </form>
    }
}

/// Read a picked file into `target` once the browser has loaded it
fn read_image(file: web_sys::File, target: RwSignal<Option<ImageAttachment>>) {
    let Ok(reader) = web_sys::FileReader::new() else {
        web_sys::console::error_1(&"FileReader unavailable".into());
        return;
    };

    let file_name = file.name();
    let content_type = file.type_();

    let onload = {
        let reader = reader.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(result) = reader.result() {
                if let Some(buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() {
                    let bytes = js_sys::Uint8Array::new(buffer).to_vec();
                    target.set(Some(attachment(&file_name, &content_type, bytes)));
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = reader.read_as_array_buffer(&file);
}

fn attachment(file_name: &str, content_type: &str, bytes: Vec<u8>) -> ImageAttachment {
    let image = ImageAttachment::new(file_name, bytes);
    if content_type.is_empty() {
        image
    } else {
        image.with_content_type(content_type)
    }
}

/// Assemble the submission from raw field values
///
/// Blank name and description are left out rather than sent empty.
fn build_submission(
    asset_type: &str,
    asset_id: &str,
    asset_name: &str,
    description: &str,
    image: Option<ImageAttachment>,
) -> AssetSubmission {
    let mut submission = AssetSubmission::new(asset_type, asset_id);
    if !asset_name.trim().is_empty() {
        submission = submission.name(asset_name);
    }
    if !description.trim().is_empty() {
        submission = submission.with_description(description);
    }
    if let Some(image) = image {
        submission = submission.image(image);
    }
    submission
}
