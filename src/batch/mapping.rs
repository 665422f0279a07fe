/// One rename/convert instruction, relative to the asset directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub source: &'static str,
    pub target: &'static str,
}

impl MappingEntry {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }
}

/// Brand logos in processing order.
///
/// Kept as a slice rather than a map: several sources may share one target,
/// and the first of them that converts wins. Later ones are skipped because
/// the target then exists.
pub const LOGO_MAPPINGS: &[MappingEntry] = &[
    MappingEntry::new("téléchargement.png", "svr.png"),
    MappingEntry::new("filorga.jpg", "filorga.png"),
    MappingEntry::new("sensilis-logo.webp", "sensilis.png"),
    MappingEntry::new("isdin-logo-png.webp", "isdin.png"),
    MappingEntry::new("Avène.jpg", "avene.png"),
    MappingEntry::new("La Roche-Posay.png", "la-roche-posay.png"),
    MappingEntry::new("Pharmaceris.png", "pharmaceris.png"),
    MappingEntry::new("Dermacare.png", "dermacare.png"),
    MappingEntry::new("vichy.png", "vichy.png"),
    MappingEntry::new("ACTIV_LOGO.webp", "activ.png"),
    MappingEntry::new("biolane.png", "biolane.png"),
    MappingEntry::new("Mustela-Symbole.png", "mustela.png"),
    MappingEntry::new("Orthomed.png", "orthomed-yuewell.png"),
    // Fallback when Orthomed.png is missing or unreadable
    MappingEntry::new("Yuewell.jpeg", "orthomed-yuewell.png"),
    MappingEntry::new("spengler.webp", "spengler.png"),
    MappingEntry::new("Rossmax.jpg", "rossmax.png"),
];
