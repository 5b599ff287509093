use serde::{Deserialize, Serialize};

/// General flags, which can also be set through the command-line args.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct FlagConfig {
    pub(crate) disable_click: Option<bool>,
}
