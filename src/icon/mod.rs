use std::path::{Path, PathBuf};

use log::debug;

use self::product::cartesian_product;

mod product;

// Largest bucket first; the remaining order follows the icon pack layout,
// not numeric size.
const RESOLUTIONS: [&str; 7] = [
    "512x512/", "128x128/", "64x64/", "96x96/", "72x72/", "48x48/", "36x36/",
];
const SUBDIRS: [&str; 2] = ["apps/", ""];
const EXTENSIONS: [&str; 3] = [".png", ".svg", ".xpm"];

pub(crate) fn lookup_icon(class_name: &str, home: &str) -> Option<PathBuf> {
    lookup_icon_with(class_name, home, |path| Path::new(path).exists())
}

pub(crate) fn lookup_icon_with(
    class_name: &str,
    home: &str,
    exists: impl Fn(&str) -> bool,
) -> Option<PathBuf> {
    lookup_icon_inner(class_name, home, &exists)
        .or_else(|| lookup_icon_inner(&class_name.to_ascii_lowercase(), home, &exists))
}

fn lookup_icon_inner(
    class_name: &str,
    home: &str,
    exists: &impl Fn(&str) -> bool,
) -> Option<PathBuf> {
    let found = candidate_paths(class_name, home)
        .into_iter()
        .find(|path| exists(path));

    match &found {
        Some(path) => debug!("Icon for {class_name}: {path}"),
        None => debug!("No icon found for {class_name}"),
    }

    found.map(PathBuf::from)
}

/// Every path a lookup would probe, in priority order. Candidates are plain
/// fragment concatenations; nothing here touches the filesystem.
pub(crate) fn candidate_paths(class_name: &str, home: &str) -> Vec<String> {
    let axes = build_axes(class_name, home);

    cartesian_product(&axes)
        .into_iter()
        .map(|combo| combo.concat())
        .collect()
}

fn build_axes(class_name: &str, home: &str) -> [Vec<String>; 4] {
    [
        vec![
            format!("{home}/.local/share/icons/WhiteSur/"),
            format!("{home}/.local/share/icons/WhiteSur-dark/"),
        ],
        RESOLUTIONS.iter().map(|it| it.to_string()).collect(),
        SUBDIRS.iter().map(|it| it.to_string()).collect(),
        EXTENSIONS
            .iter()
            .map(|ext| format!("{class_name}{ext}"))
            .collect(),
    ]
}
