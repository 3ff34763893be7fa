use crate::ui::components::dialog::Dialog;
use crate::ui::components::image::ResponsiveImage;
use dioxus::prelude::*;

/// Thumbnail that opens an enlarged view of the same image
#[component]
pub fn ImageDialog(
    image_url: String,
    alt_text: String,
    on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        Dialog {
            trigger: children,
            on_open_change,
            content_class: "max-w-4xl",

            div {
                class: "relative w-full h-[80vh] mt-4",
                ResponsiveImage {
                    src: image_url,
                    alt: alt_text,
                    class: "object-contain rounded-lg",
                    sizes: "90vw",
                }
            }
        }
    }
}
