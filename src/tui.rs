//! インタラクティブ選択 UI

pub mod dialog;

use crate::error::{CliError, Result};
use crate::registry::Registry;
use dialog::{multi_select, SelectItem};

/// コンポーネント選択ダイアログを表示
///
/// registry の全コンポーネントを一覧し、インストール対象を複数選択する。
/// キャンセルは `CliError::Cancelled`、空選択はエラーとして返す。
pub fn select_components(registry: &Registry) -> Result<Vec<String>> {
    let mut items: Vec<SelectItem<String>> = registry
        .components
        .iter()
        .map(|c| {
            let description = match c.dependencies.len() {
                0 => format!("{} file(s)", c.files.len()),
                n => format!("{} file(s), {} dep(s)", c.files.len(), n),
            };
            SelectItem::new(&c.name, c.name.clone()).with_description(description)
        })
        .collect();

    let result = multi_select("Select components to add", &mut items)
        .map_err(|e| CliError::Tui(e.to_string()))?;

    if result.cancelled {
        return Err(CliError::Cancelled);
    }
    if result.selected.is_empty() {
        return Err(CliError::Validation(
            "no components selected".to_string(),
        ));
    }

    Ok(result.selected)
}
