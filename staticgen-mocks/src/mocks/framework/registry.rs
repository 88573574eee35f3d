//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
    Int(i32),
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    pub enum_options: Option<Vec<(&'static str, &'static str)>>, // (value, label) for enums
    pub int_range: Option<(i32, i32)>,                           // inclusive (min, max)
}

impl ControlDef {
    fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
            int_range: None,
        }
    }

    /// Parse a raw URL state value, falling back to the default when it
    /// doesn't fit this control.
    fn parse_value(&self, raw: Option<&str>) -> ControlValue {
        let Some(raw) = raw else {
            return self.default.clone();
        };
        match &self.default {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::String(default) => {
                let known = self
                    .enum_options
                    .as_ref()
                    .map_or(true, |options| options.iter().any(|(v, _)| *v == raw));
                ControlValue::String(if known { raw.to_string() } else { default.clone() })
            }
            ControlValue::Int(default) => {
                ControlValue::Int(raw.parse().map(|v| self.clamp(v)).unwrap_or(*default))
            }
        }
    }

    /// Clamp an integer into this control's range
    pub fn clamp(&self, value: i32) -> i32 {
        match self.int_range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

/// Builder for creating a ControlRegistry
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            presets: Vec::new(),
        }
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    /// Add an integer control limited to `min..=max`
    pub fn int_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: i32,
        min: i32,
        max: i32,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::Int(default));
        def.int_range = Some((min, max));
        self.controls.push(def);
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Add state presets
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();

        for def in &self.controls {
            let raw = state_pairs
                .iter()
                .find(|(k, _)| k == def.key)
                .map(|(_, v)| v.as_str());
            let initial = def.parse_value(raw);
            // Same number of controls on every render, so hooks stay in order
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Current value of a control (reads signal, creating subscription)
    pub fn get(&self, key: &str) -> Option<ControlValue> {
        self.values.get(key).map(|s| s.read().clone())
    }

    pub fn get_bool(&self, key: &'static str) -> bool {
        matches!(self.get(key), Some(ControlValue::Bool(true)))
    }

    pub fn get_string(&self, key: &'static str) -> String {
        match self.get(key) {
            Some(ControlValue::String(s)) => s,
            _ => String::new(),
        }
    }

    pub fn get_int(&self, key: &'static str) -> i32 {
        match self.get(key) {
            Some(ControlValue::Int(i)) => i,
            _ => 0,
        }
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        self.set(key, ControlValue::Bool(value));
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        self.set(key, ControlValue::String(value));
    }

    /// Set an integer value, clamped to the control's range
    pub fn set_int(&self, key: &'static str, value: i32) {
        let value = self
            .controls
            .iter()
            .find(|c| c.key == key)
            .map_or(value, |c| c.clamp(value));
        self.set(key, ControlValue::Int(value));
    }

    fn set(&self, key: &str, value: ControlValue) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(value);
        }
    }

    /// Apply a preset - resets all controls to defaults, then applies preset values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            self.set(control.key, control.default.clone());
        }
        for (key, value) in &preset.values {
            self.set(key, value.clone());
        }
    }

    /// Build URL state string from the values that differ from their defaults
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            let Some(signal) = self.values.get(def.key) else {
                continue;
            };
            let value = signal.read();
            match (&*value, &def.default) {
                (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                    builder.set_bool(def.key, *v, *default);
                }
                (ControlValue::String(v), ControlValue::String(default)) => {
                    if v != default {
                        builder.set_string(def.key, v);
                    }
                }
                (ControlValue::Int(v), ControlValue::Int(default)) => {
                    if v != default {
                        builder.set_string(def.key, &v.to_string());
                    }
                }
                _ => {}
            }
        }

        builder.build_option()
    }

    /// Keep the page URL in sync with the controls. `to_route` wraps the
    /// encoded state in the mock page's route.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            // The initial state already came from the URL
            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}
