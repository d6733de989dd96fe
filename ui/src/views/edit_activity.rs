use dioxus::prelude::*;

use crate::activity::ActivityEditor;

#[component]
pub fn EditActivity() -> Element {
    rsx! {
        section { class: "page page-activity",
            h1 { "Edit activity" }
            p {
                "Review recent log rows, edit your own entries inline, and reconcile local changes against the server copy."
            }

            ActivityEditor {}
        }
    }
}
