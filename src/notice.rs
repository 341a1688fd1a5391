use std::{collections::HashMap, path::Path};

use common::{MyResult, MyResultTrait};

pub const DEFAULT_NOTICE: &str = "Environment variables injected into {file}";

/// Formats the completion line. `{file}` expands to the target path.
pub fn completion_notice<P: AsRef<Path>>(template: &str, file: P) -> MyResult<String> {
    let vars = HashMap::from([("file".to_string(), file.as_ref().display().to_string())]);
    strfmt::strfmt(template, &vars).my_result()
}
