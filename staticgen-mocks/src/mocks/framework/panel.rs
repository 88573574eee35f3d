//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlRegistry};
use crate::Route;
use dioxus::prelude::*;

/// Main mock panel component that renders controls, presets, and the mock content
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            // Controls panel
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::Gallery {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Gallery"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in registry.presets.clone() {
                button {
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Auto-generated controls row
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    // Enums render as button groups, everything else inline
    let enum_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_some())
        .cloned()
        .collect();
    let inline_controls: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_none())
        .cloned()
        .collect();

    rsx! {
        for control in enum_controls {
            div { class: "flex flex-wrap gap-2 mb-3",
                span { class: "text-xs text-gray-500 self-center mr-2", "{control.label}:" }
                for (value , label) in control.enum_options.clone().unwrap_or_default() {
                    EnumButton {
                        registry: registry.clone(),
                        control_key: control.key,
                        value,
                        label,
                        doc: control.doc,
                    }
                }
            }
        }

        if !inline_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 text-sm",
                for control in inline_controls {
                    if control.int_range.is_some() {
                        IntInput {
                            registry: registry.clone(),
                            control_key: control.key,
                            label: control.label,
                            doc: control.doc,
                        }
                    } else {
                        BoolCheckbox {
                            registry: registry.clone(),
                            control_key: control.key,
                            label: control.label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
        }
    }
}

/// Number input for an integer control - out-of-range input is clamped
#[component]
fn IntInput(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_int(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            "{label}"
            input {
                r#type: "number",
                class: "w-20 px-2 py-0.5 rounded bg-gray-700 text-white",
                value: "{current}",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse::<i32>() {
                        registry.set_int(control_key, value);
                    }
                },
            }
        }
    }
}
