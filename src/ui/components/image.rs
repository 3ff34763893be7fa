use dioxus::prelude::*;

/// Image that fills its positioned parent
///
/// Load failures are left to the webview's broken-image rendering.
#[component]
pub fn ResponsiveImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
    #[props(default = "100vw".to_string())] sizes: String,
) -> Element {
    rsx! {
        img {
            class: "absolute inset-0 w-full h-full {class}",
            src: "{src}",
            alt: "{alt}",
            "sizes": "{sizes}",
            loading: "lazy",
            decoding: "async",
            draggable: "false",
        }
    }
}
