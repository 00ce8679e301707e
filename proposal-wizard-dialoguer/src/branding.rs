use std::path::Path;

use proposal_wizard::WizardError;
use tracing::warn;

pub const BRAND: &str = "Digital Bridge RDC";

pub const CONFIDENTIALITY_NOTICE: &str = "AVIS DE CONFIDENTIALITÉ\n\
Ce document est la propriété du Digital Bridge RDC, SPRL. Les informations contenues dans ce \
document sont strictement confidentielles et ne peuvent être partagées sans autorisation \
écrite préalable.\n\
© 2025 Digital Bridge RDC, SPRL. Tous droits réservés.";

const RULE_WIDTH: usize = 60;

/// Fail with `ImageAssetMissing` unless the logo file exists.
pub fn check_logo(path: &Path) -> Result<(), WizardError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(WizardError::ImageAssetMissing(path.to_path_buf()))
    }
}

/// Inline notice shown in place of a missing logo.
pub fn missing_logo_notice(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Logo {name} non trouvé")
}

/// Banner printed before the first page.
///
/// A missing logo is reported inline; it never stops the wizard.
pub fn header(logo: &Path) -> String {
    let mut out = String::new();
    out.push_str(BRAND);
    out.push('\n');
    if let Err(err) = check_logo(logo) {
        warn!(%err, "continuing without logo");
        out.push_str(&missing_logo_notice(logo));
        out.push('\n');
    }
    out.push_str(&"─".repeat(RULE_WIDTH));
    out
}

pub fn footer() -> String {
    format!("{}\n{CONFIDENTIALITY_NOTICE}", "─".repeat(RULE_WIDTH))
}
