//! Display font for the formula surfaces.

use egui::{Context, FontData, FontDefinitions, FontFamily};

/// Named family the formula surfaces lay text out with.
pub const FIELD_FONT_FAMILY: &str = "quillink-math";

/// Math display font picked up at runtime when installed next to the app.
const FONT_PATH: &str = "assets/fonts/STIXTwoMath-Regular.otf";

/// Register the field font family on `ctx`. Runs once per context.
///
/// When the font file is missing (headless or stripped installs) the
/// family is aliased onto the built-in fonts instead, so family lookups
/// never fail.
pub fn install_field_font(ctx: &Context) {
    let flag = egui::Id::new("quillink-fonts");
    let already = ctx.data_mut(|d| {
        let installed = d.get_temp::<bool>(flag).unwrap_or(false);
        d.insert_temp(flag, true);
        installed
    });
    if already {
        return;
    }

    let mut fonts = FontDefinitions::default();
    let family = FontFamily::Name(FIELD_FONT_FAMILY.into());
    let builtin = fonts
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    match std::fs::read(FONT_PATH) {
        Ok(bytes) => {
            fonts
                .font_data
                .insert(FIELD_FONT_FAMILY.to_owned(), FontData::from_owned(bytes).into());
            let mut names = vec![FIELD_FONT_FAMILY.to_owned()];
            names.extend(builtin);
            fonts.families.insert(family, names);
        }
        Err(err) => {
            log::debug!("formula font not found ({err}); using built-in fonts");
            fonts.families.insert(family, builtin);
        }
    }
    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{FontId, RawInput};

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let ctx = Context::default();
        install_field_font(&ctx);

        // Layout with the named family has to work even without the font
        // file on disk.
        let _ = ctx.run(RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.painter().layout_no_wrap(
                    r"\sqrt{2}".to_string(),
                    FontId::new(16.0, FontFamily::Name(FIELD_FONT_FAMILY.into())),
                    egui::Color32::BLACK,
                );
            });
        });
    }

    #[test]
    fn test_install_runs_once_per_context() {
        let ctx = Context::default();
        install_field_font(&ctx);
        install_field_font(&ctx);
        let installed = ctx.data_mut(|d| d.get_temp::<bool>(egui::Id::new("quillink-fonts")));
        assert_eq!(installed, Some(true));
    }
}
