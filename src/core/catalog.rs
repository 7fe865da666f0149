//! Static preset prompt and view angle catalogs

use serde::Serialize;

/// Icon shown next to a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetIcon {
    Palette,
    Wand,
    Camera,
}

/// One-click editing instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetPrompt {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
    pub icon: PresetIcon,
}

/// Camera angle for six-view object generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAngle {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prompt_hint: &'static str,
}

pub static PRESETS: &[PresetPrompt] = &[
    PresetPrompt {
        id: "dark-tech",
        title: "Dark tech",
        description: "Add blue neon lighting",
        prompt: "Turn this product photo into a dark tech style with blue neon lighting effects",
        icon: PresetIcon::Palette,
    },
    PresetPrompt {
        id: "cyberpunk",
        title: "Cyberpunk",
        description: "Convert to an illustration",
        prompt: "Turn this portrait photo into a cyberpunk illustration",
        icon: PresetIcon::Wand,
    },
    PresetPrompt {
        id: "white-bg",
        title: "White studio",
        description: "Replace the background and sharpen",
        prompt: "Replace the background with a seamless white studio, make the subject stand out and increase sharpness",
        icon: PresetIcon::Camera,
    },
];

pub static VIEW_ANGLES: &[ViewAngle] = &[
    ViewAngle {
        id: "front",
        title: "front view",
        subtitle: "Overall structure and proportions",
        prompt_hint: "Generate a front view of the object that clearly shows its main structure, materials and proportions, with a soft background that does not draw attention.",
    },
    ViewAngle {
        id: "back",
        title: "back view",
        subtitle: "Rear structure and details",
        prompt_hint: "Generate a back view of the object focusing on the rear shape, joints and texture details, under soft lighting.",
    },
    ViewAngle {
        id: "left",
        title: "left side view",
        subtitle: "Side thickness and contour",
        prompt_hint: "Generate a left side view of the object emphasizing contour lines and thickness, with light shadows to convey volume.",
    },
    ViewAngle {
        id: "right",
        title: "right side view",
        subtitle: "Mirror of the left side",
        prompt_hint: "Generate a right side view of the object keeping materials and lighting consistent with the left side view.",
    },
    ViewAngle {
        id: "top",
        title: "top view",
        subtitle: "Layout from above",
        prompt_hint: "Generate a top-down view of the object showing its overall layout and proportions from above, on a clean background.",
    },
    ViewAngle {
        id: "bottom",
        title: "bottom view",
        subtitle: "Underside structure",
        prompt_hint: "Generate a bottom-up view of the object emphasizing the underside, feet or supports, with slightly raised contrast for readability.",
    },
];

pub fn presets() -> &'static [PresetPrompt] {
    PRESETS
}

pub fn view_angles() -> &'static [ViewAngle] {
    VIEW_ANGLES
}

pub fn find_preset(id: &str) -> Option<&'static PresetPrompt> {
    PRESETS.iter().find(|preset| preset.id == id)
}

pub fn find_view_angle(id: &str) -> Option<&'static ViewAngle> {
    VIEW_ANGLES.iter().find(|angle| angle.id == id)
}
