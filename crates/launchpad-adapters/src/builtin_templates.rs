//! Built-in profession templates.
//!
//! These ship compiled into the binary and seed the settings document on
//! first run. Entry names ending up as files vs. directories follows the
//! `.` convention, applied once here via `entries_from_names`.

use launchpad_core::domain::{DEFAULT_TEMPLATE_ID, Template};

/// All built-in templates, in catalog display order. The `default`
/// template is always last, so profession-specific templates lead the
/// pickers.
///
/// # Panics
///
/// The definitions below are static and validated in tests; `expect` here
/// can only fire on a programming error in this file.
pub fn all() -> Vec<Template> {
    vec![
        Template::builder("vfx-artist")
            .name("VFX Artist")
            .description("VFX workflow with After Effects, Nuke, plates, and elements")
            .profession("VFX")
            .icon("\u{1f3ac}")
            .color("#ff6b6b")
            .entries_from_names([
                "AE_Comps",
                "Nuke_Scripts",
                "Renders",
                "Plates_Raw",
                "Elements_CGI",
                "References",
            ])
            .build()
            .expect("vfx-artist template is statically valid"),
        Template::builder("3d-artist")
            .name("3D Artist")
            .description("3D pipeline with Maya, Blender, textures, and renders")
            .profession("3D")
            .icon("\u{1f3ad}")
            .color("#4ecdc4")
            .entries_from_names([
                "Maya_Scenes",
                "Blender_Files",
                "Textures",
                "Renders",
                "Models_Export",
                "References",
            ])
            .build()
            .expect("3d-artist template is statically valid"),
        Template::builder("developer")
            .name("Developer")
            .description("Software development with src, docs, tests, and build folders")
            .profession("Development")
            .icon("\u{1f4bb}")
            .color("#45b7d1")
            .entries_from_names(["src", "docs", "tests", "assets", "build", "README.md"])
            .build()
            .expect("developer template is statically valid"),
        Template::builder("graphic-designer")
            .name("Graphic Designer")
            .description("Design workflow with Photoshop, Illustrator, and InDesign")
            .profession("Design")
            .icon("\u{1f3a8}")
            .color("#f9ca24")
            .entries_from_names([
                "Photoshop_Files",
                "Illustrator_Files",
                "InDesign_Files",
                "Final_Exports",
                "Assets_Fonts",
                "References",
            ])
            .build()
            .expect("graphic-designer template is statically valid"),
        Template::builder("video-editor")
            .name("Video Editor")
            .description("Video editing with Premiere, DaVinci, footage, and exports")
            .profession("Video")
            .icon("\u{1f39e}\u{fe0f}")
            .color("#a55eea")
            .entries_from_names([
                "Premiere_Projects",
                "DaVinci_Projects",
                "Raw_Footage",
                "Audio",
                "Final_Exports",
                "Graphics_Motion",
            ])
            .build()
            .expect("video-editor template is statically valid"),
        Template::builder("photographer")
            .name("Photographer")
            .description("Photography workflow with RAW files, Lightroom, and delivery")
            .profession("Photography")
            .icon("\u{1f4f8}")
            .color("#26de81")
            .entries_from_names([
                "RAW_Files",
                "Lightroom_Catalog",
                "Edited_Photos",
                "Final_Delivery",
                "Contact_Sheets",
            ])
            .build()
            .expect("photographer template is statically valid"),
        Template::builder(DEFAULT_TEMPLATE_ID)
            .name("General")
            .description("Basic project structure with AEP and Premiere Pro folders")
            .profession("General")
            .icon("\u{1f4c1}")
            .color("#778ca3")
            .entries_from_names([
                "AEP", "prePro", "Renders", "Planning", "Assets", "Audio", "Graphics", "Archive",
            ])
            .build()
            .expect("default template is statically valid"),
    ]
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_core::application::TemplateCatalog;
    use launchpad_core::domain::EntryKind;

    #[test]
    fn builtins_form_a_valid_catalog() {
        // Exercises every catalog invariant: per-template validity,
        // unique ids, default present.
        let catalog = TemplateCatalog::new(all()).unwrap();
        assert_eq!(catalog.list().len(), 7);
    }

    #[test]
    fn developer_readme_is_a_file_entry() {
        let templates = all();
        let developer = templates.iter().find(|t| t.id == "developer").unwrap();
        let readme = developer
            .entries
            .iter()
            .find(|e| e.name == "README.md")
            .unwrap();
        assert_eq!(readme.kind, EntryKind::File);
        assert_eq!(
            developer
                .entries
                .iter()
                .filter(|e| e.kind == EntryKind::Directory)
                .count(),
            5
        );
    }

    #[test]
    fn every_builtin_has_presentation_metadata() {
        for template in all() {
            assert!(!template.name.is_empty(), "{} has no name", template.id);
            assert!(
                !template.profession.is_empty(),
                "{} has no profession",
                template.id
            );
            assert!(!template.color.is_empty(), "{} has no color", template.id);
        }
    }
}
