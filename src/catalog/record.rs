use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Globe,
    Pencil,
    Smartphone,
    Cart,
    Search,
    Palette,
    Wrench,
    Server,
    Megaphone,
}

impl Icon {
    #[cfg(test)]
    pub const ALL: [Icon; 9] = [
        Self::Globe,
        Self::Pencil,
        Self::Smartphone,
        Self::Cart,
        Self::Search,
        Self::Palette,
        Self::Wrench,
        Self::Server,
        Self::Megaphone,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Globe => "🌐",
            Self::Pencil => "✏",
            Self::Smartphone => "📱",
            Self::Cart => "🛒",
            Self::Search => "🔍",
            Self::Palette => "🎨",
            Self::Wrench => "🔧",
            Self::Server => "🖥",
            Self::Megaphone => "📣",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub icon: Icon,
}

/// Ordered, read-only list of service offerings.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<ServiceRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ServiceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Context, FontId, RawInput};

    use super::*;

    #[test]
    fn icon_glyphs_exist_in_default_fonts() {
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |_| {});
        let font_id = FontId::proportional(20.0);

        for icon in Icon::ALL {
            let glyph = icon.glyph();
            assert!(
                ctx.fonts_mut(|fonts| fonts.has_glyphs(&font_id, glyph)),
                "{icon:?} glyph {glyph} is not covered by the bundled fonts"
            );
        }
    }
}
