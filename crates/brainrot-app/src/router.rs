//! Query-string router mapping navigation requests to actions

use indexmap::IndexMap;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left as-is when building navigation URLs
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A parsed navigation request: a flat map of string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    params: IndexMap<String, String>,
}

impl Request {
    /// Parse a query string such as `?action=show_base_brainrots&base=Yard`
    ///
    /// Pieces without `=` and parameters with an empty value are dropped.
    /// When a key repeats, the last value wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = IndexMap::new();

        for piece in query.split('&') {
            let Some((key, value)) = piece.split_once('=') else {
                continue;
            };
            let key = decode(key);
            let value = decode(value);
            if key.is_empty() || value.is_empty() {
                continue;
            }
            params.insert(key, value);
        }

        Self { params }
    }

    /// Value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The `action` parameter, if any
    pub fn action(&self) -> Option<&str> {
        self.get("action")
    }

    fn require(&self, action: &'static str, param: &'static str) -> Result<String, RouteError> {
        self.get(param)
            .map(str::to_string)
            .ok_or(RouteError::MissingParam { action, param })
    }

    fn optional(&self, param: &str) -> Option<String> {
        self.get(param).map(str::to_string)
    }

    /// Comma-separated list parameter; blank entries are skipped
    fn list(&self, param: &str) -> Vec<String> {
        self.get(param)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

fn encode(raw: &str) -> String {
    raw.split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Everything the user can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Root menu
    Menu,
    /// List of all bases
    Bases,
    /// List of all traits
    Traits,
    /// The whole brainrot catalogue
    Catalogue,
    /// Brainrots stored in one base
    BaseBrainrots { base: String },
    AddBase,
    RenameBase { name: String },
    DeleteBase { name: String },
    /// Add an instance to a base
    ///
    /// Each choice given here skips its prompt.
    AddBrainrot {
        base: String,
        brainrot: Option<String>,
        mutation: Option<String>,
        traits: Vec<String>,
    },
    DeleteBrainrot { base: String, id: String },
    MoveBrainrot { base: String, id: String },
}

impl Action {
    /// Resolve the action a request names
    pub fn from_request(request: &Request) -> Result<Self, RouteError> {
        let Some(action) = request.action() else {
            return Ok(Action::Menu);
        };

        let resolved = match action {
            "mes_bases" => Action::Bases,
            "tous_les_traits" => Action::Traits,
            "toutes_les_brainrots" => Action::Catalogue,
            "show_base_brainrots" => Action::BaseBrainrots {
                base: request.require("show_base_brainrots", "base")?,
            },
            "add_base" => Action::AddBase,
            "rename_base" => Action::RenameBase {
                name: request.require("rename_base", "name")?,
            },
            "delete_base" => Action::DeleteBase {
                name: request.require("delete_base", "name")?,
            },
            "add_brainrot" => Action::AddBrainrot {
                base: request.require("add_brainrot", "base")?,
                brainrot: request.optional("brainrot"),
                mutation: request.optional("mutation"),
                traits: request.list("traits"),
            },
            "delete_brainrot" => Action::DeleteBrainrot {
                base: request.require("delete_brainrot", "base")?,
                id: request.require("delete_brainrot", "id")?,
            },
            "move_brainrot" => Action::MoveBrainrot {
                base: request.require("move_brainrot", "base")?,
                id: request.require("move_brainrot", "id")?,
            },
            other => return Err(RouteError::UnknownAction(other.to_string())),
        };
        Ok(resolved)
    }

    /// Wire name of the action, `None` for the root menu
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Action::Menu => return None,
            Action::Bases => "mes_bases",
            Action::Traits => "tous_les_traits",
            Action::Catalogue => "toutes_les_brainrots",
            Action::BaseBrainrots { .. } => "show_base_brainrots",
            Action::AddBase => "add_base",
            Action::RenameBase { .. } => "rename_base",
            Action::DeleteBase { .. } => "delete_base",
            Action::AddBrainrot { .. } => "add_brainrot",
            Action::DeleteBrainrot { .. } => "delete_brainrot",
            Action::MoveBrainrot { .. } => "move_brainrot",
        };
        Some(name)
    }

    /// Parameters of the action, `action` first
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = self.name() {
            params.push(("action", name.to_string()));
        }
        match self {
            Action::BaseBrainrots { base } => {
                params.push(("base", base.clone()));
            }
            Action::AddBrainrot {
                base,
                brainrot,
                mutation,
                traits,
            } => {
                params.push(("base", base.clone()));
                if let Some(brainrot) = brainrot {
                    params.push(("brainrot", brainrot.clone()));
                }
                if let Some(mutation) = mutation {
                    params.push(("mutation", mutation.clone()));
                }
                if !traits.is_empty() {
                    params.push(("traits", traits.join(",")));
                }
            }
            Action::RenameBase { name } | Action::DeleteBase { name } => {
                params.push(("name", name.clone()));
            }
            Action::DeleteBrainrot { base, id } | Action::MoveBrainrot { base, id } => {
                params.push(("base", base.clone()));
                params.push(("id", id.clone()));
            }
            Action::Menu | Action::Bases | Action::Traits | Action::Catalogue | Action::AddBase => {}
        }
        params
    }

    /// Navigation URL for this action under the given plugin prefix
    pub fn url(&self, plugin_url: &str) -> String {
        let query = self
            .params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", plugin_url, query)
    }
}

/// Routing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Missing parameter '{param}' for action '{action}'")]
    MissingParam {
        action: &'static str,
        param: &'static str,
    },

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
