use eframe::egui;
use std::ops::RangeInclusive;

/// Builder for creating sliders with automatic change tracking
pub struct SliderBuilder<'a, T> {
    value: &'a mut T,
    range: RangeInclusive<T>,
    text: String,
    suffix: Option<String>,
}

impl<'a, T> SliderBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T, range: RangeInclusive<T>) -> Self {
        Self {
            value,
            range,
            text: String::new(),
            suffix: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut slider = egui::Slider::new(self.value, self.range)
            .clamping(egui::SliderClamping::Always)
            .integer();

        if !self.text.is_empty() {
            slider = slider.text(self.text);
        }

        if let Some(suffix) = self.suffix {
            slider = slider.suffix(suffix);
        }

        ui.add(slider).changed()
    }
}

/// Builder for ranged drag values
pub struct DragValueBuilder<'a, T> {
    value: &'a mut T,
    range: RangeInclusive<T>,
    suffix: Option<String>,
    speed: Option<f32>,
}

impl<'a, T> DragValueBuilder<'a, T>
where
    T: egui::emath::Numeric,
{
    pub fn new(value: &'a mut T, range: RangeInclusive<T>) -> Self {
        Self {
            value,
            range,
            suffix: None,
            speed: None,
        }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut drag = egui::DragValue::new(self.value).range(self.range);

        if let Some(suffix) = self.suffix {
            drag = drag.suffix(suffix);
        }

        if let Some(speed) = self.speed {
            drag = drag.speed(speed);
        }

        ui.add(drag).changed()
    }
}

/// Labeled horizontal drag value limited to `range`
pub fn labeled_drag<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        let mut drag = DragValueBuilder::new(value, range).speed(0.2);
        if !suffix.is_empty() {
            drag = drag.suffix(suffix);
        }
        drag.show(ui)
    })
    .inner
}

/// Enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, String)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| text.as_str())
            .unwrap_or("Unknown");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_label(value == option_value, option_text.as_str())
                        .clicked()
                    {
                        *value = option_value.clone();
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Two-column key/value row used by the statistics panel
pub fn stat_row(ui: &mut egui::Ui, key: &str, value: impl Into<egui::WidgetText>) {
    ui.label(key);
    ui.label(value);
    ui.end_row();
}
