//! End-to-end navigation over on-disk documents with scripted answers

use brainrot_app::{App, Config, Dialog, NoticeLevel, SortOrder};
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

/// One pre-recorded answer
enum Answer {
    Input(Option<&'static str>),
    Select(Option<usize>),
    Multi(Option<Vec<usize>>),
}

/// Dialog that replays answers and records what was shown
#[derive(Default)]
struct ScriptedDialog {
    answers: VecDeque<Answer>,
    oks: Vec<(String, String)>,
    notices: Vec<(String, String, NoticeLevel)>,
    prompts: Vec<(String, Vec<String>)>,
}

impl ScriptedDialog {
    fn with(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }
}

impl Dialog for ScriptedDialog {
    fn ok(&mut self, heading: &str, message: &str) {
        self.oks.push((heading.to_string(), message.to_string()));
    }

    fn notification(&mut self, heading: &str, message: &str, level: NoticeLevel) {
        self.notices
            .push((heading.to_string(), message.to_string(), level));
    }

    fn input(&mut self, heading: &str, _default: &str) -> Option<String> {
        self.prompts.push((heading.to_string(), Vec::new()));
        match self.answers.pop_front() {
            Some(Answer::Input(answer)) => answer.map(str::to_string),
            _ => panic!("unexpected input prompt: {heading}"),
        }
    }

    fn select(&mut self, heading: &str, options: &[String]) -> Option<usize> {
        self.prompts.push((heading.to_string(), options.to_vec()));
        match self.answers.pop_front() {
            Some(Answer::Select(answer)) => answer,
            _ => panic!("unexpected select prompt: {heading}"),
        }
    }

    fn multiselect(&mut self, heading: &str, options: &[String]) -> Option<Vec<usize>> {
        self.prompts.push((heading.to_string(), options.to_vec()));
        match self.answers.pop_front() {
            Some(Answer::Multi(answer)) => answer,
            _ => panic!("unexpected multiselect prompt: {heading}"),
        }
    }
}

struct Fixture {
    root: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let data = root.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(
            data.join("BrainrotsCatalogue.json"),
            r#"[
                {"Id": "fred", "Name": "Fred", "Rarity": "Legendary", "Cost": 1000000, "BaseIncomePerSecond": 100},
                {"Name": "Tim Cheese", "Rarity": "Rare", "Cost": "500", "BaseIncomePerSecond": 10, "AddedAt": "2024-03-01"}
            ]"#,
        )
        .unwrap();
        fs::write(
            data.join("Traits.json"),
            r#"[{"Name": "Fast", "Multiplier": 3}, {"Name": "Zombie", "Multiplier": 5}]"#,
        )
        .unwrap();
        fs::write(
            data.join("Mutations.json"),
            r#"[{"Name": "Gold", "Multiplier": 2}, {"Name": "Rainbow", "Multiplier": 10}]"#,
        )
        .unwrap();
        Self { root }
    }

    fn config(&self) -> Config {
        Config::rooted_at(self.root.path())
    }

    fn app(&self, answers: Vec<Answer>) -> App<ScriptedDialog> {
        App::new(self.config(), ScriptedDialog::with(answers))
    }

    fn bases_json(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.config().bases_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn write_bases(&self, json: &str) {
        fs::write(self.config().bases_path(), json).unwrap();
    }
}

#[test]
fn root_menu_without_action() {
    let fixture = Fixture::new();
    let mut app = fixture.app(vec![]);

    let response = app.handle_query("");
    let dir = response.directory.unwrap();
    assert_eq!(dir.items.len(), 3);
    assert!(!response.refresh);
}

#[test]
fn add_base_then_list() {
    let fixture = Fixture::new();
    let mut app = fixture.app(vec![Answer::Input(Some("Yard"))]);

    let response = app.handle_query("action=add_base");
    assert!(response.refresh);
    assert_eq!(app.dialog().notices[0].0, "Base added");
    assert_eq!(fixture.bases_json(), serde_json::json!([{"Name": "Yard", "Brainrots": []}]));

    let dir = app.handle_query("?action=mes_bases").directory.unwrap();
    assert_eq!(dir.items[0].label, "Yard (0 brainrots)");
}

#[test]
fn cancelled_add_base_writes_nothing() {
    let fixture = Fixture::new();
    let mut app = fixture.app(vec![Answer::Input(None)]);

    let response = app.handle_query("action=add_base");
    assert!(!response.refresh);
    assert!(!fixture.config().bases_path().exists());
}

#[test]
fn add_brainrot_walks_the_prompts() {
    let fixture = Fixture::new();
    fixture.write_bases(r#"[{"Name": "Yard", "Brainrots": []}]"#);
    let mut app = fixture.app(vec![
        Answer::Select(Some(0)),
        Answer::Select(Some(0)),
        Answer::Multi(Some(vec![0])),
    ]);

    let response = app.handle_query("action=add_brainrot&base=Yard");
    assert!(response.refresh);

    let prompts = &app.dialog().prompts;
    assert_eq!(prompts[0].1, vec!["Fred  [Legendary]", "Tim Cheese  [Rare]"]);
    assert_eq!(prompts[1].1, vec!["Gold (x2)", "Rainbow (x10)"]);
    assert_eq!(prompts[2].1, vec!["Fast (x3)", "Zombie (x5)"]);

    let bases = fixture.bases_json();
    let added = &bases[0]["Brainrots"][0];
    assert_eq!(added["Id"], "fred-gold-fast");
    assert_eq!(added["BaseName"], "Yard");
    assert_eq!(added["Mutation"]["Name"], "Gold");
    assert_eq!(added["Traits"][0]["Name"], "Fast");

    let dir = app
        .handle_query("action=show_base_brainrots&base=Yard")
        .directory
        .unwrap();
    assert_eq!(dir.items[0].label, "Fred - Legendary - $400/s");
}

#[test]
fn cancelled_trait_step_adds_without_traits() {
    let fixture = Fixture::new();
    fixture.write_bases(r#"[{"Name": "Yard", "Brainrots": []}]"#);
    let mut app = fixture.app(vec![
        Answer::Select(Some(1)),
        Answer::Select(Some(1)),
        Answer::Multi(None),
    ]);

    assert!(app.handle_query("action=add_brainrot&base=Yard").refresh);
    assert_eq!(fixture.bases_json()[0]["Brainrots"][0]["Id"], "timcheese-rainbow");
}

#[test]
fn cancelled_mutation_step_aborts() {
    let fixture = Fixture::new();
    let original = r#"[{"Name": "Yard", "Brainrots": []}]"#;
    fixture.write_bases(original);
    let mut app = fixture.app(vec![Answer::Select(Some(0)), Answer::Select(None)]);

    assert!(!app.handle_query("action=add_brainrot&base=Yard").refresh);
    assert_eq!(
        fs::read_to_string(fixture.config().bases_path()).unwrap(),
        original
    );
}

#[test]
fn add_brainrot_from_request_skips_prompts() {
    let fixture = Fixture::new();
    fixture.write_bases(r#"[{"Name": "Yard", "Brainrots": []}]"#);
    let mut app = fixture.app(vec![]);

    let response = app.handle_query(
        "action=add_brainrot&base=Yard&brainrot=Tim+Cheese&mutation=Gold&traits=Zombie,Fast",
    );
    assert!(response.refresh);
    assert!(app.dialog().prompts.is_empty());

    let response = app.handle_query("action=add_brainrot&base=Yard&brainrot=fred&mutation=Rainbow");
    assert!(response.refresh);
    assert!(app.dialog().prompts.is_empty());

    let bases = fixture.bases_json();
    assert_eq!(bases[0]["Brainrots"][0]["Id"], "timcheese-gold-zombie-fast");
    assert_eq!(bases[0]["Brainrots"][0]["Traits"][0]["Name"], "Zombie");
    assert_eq!(bases[0]["Brainrots"][1]["Id"], "fred-rainbow");
    assert_eq!(bases[0]["Brainrots"][1]["Traits"], serde_json::json!([]));
}

#[test]
fn add_brainrot_prompts_only_for_missing_choices() {
    let fixture = Fixture::new();
    fixture.write_bases(r#"[{"Name": "Yard", "Brainrots": []}]"#);
    let mut app = fixture.app(vec![Answer::Select(Some(1)), Answer::Multi(Some(vec![1]))]);

    assert!(app
        .handle_query("action=add_brainrot&base=Yard&mutation=Rainbow")
        .refresh);
    let prompts = &app.dialog().prompts;
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0].0, "Select a brainrot to add");
    assert_eq!(prompts[1].0, "Select traits");
    assert_eq!(fixture.bases_json()[0]["Brainrots"][0]["Id"], "timcheese-rainbow-zombie");
}

#[test]
fn add_brainrot_with_unknown_name_reports_error() {
    let fixture = Fixture::new();
    let original = r#"[{"Name": "Yard", "Brainrots": []}]"#;
    fixture.write_bases(original);
    let mut app = fixture.app(vec![]);

    let response = app.handle_query("action=add_brainrot&base=Yard&brainrot=Nobody&mutation=Gold");
    assert!(!response.refresh);
    assert_eq!(app.dialog().oks[0].0, "Error");
    assert!(app.dialog().oks[0].1.contains("Nobody"));

    let response =
        app.handle_query("action=add_brainrot&base=Yard&brainrot=fred&mutation=Gold&traits=Slow");
    assert!(!response.refresh);
    assert_eq!(app.dialog().oks.len(), 2);
    assert!(app.dialog().oks[1].1.contains("Slow"));
    assert_eq!(
        fs::read_to_string(fixture.config().bases_path()).unwrap(),
        original
    );
}

#[test]
fn add_brainrot_to_unknown_base_reports_error() {
    let fixture = Fixture::new();
    fixture.write_bases(r#"[{"Name": "Yard", "Brainrots": []}]"#);
    let mut app = fixture.app(vec![
        Answer::Select(Some(0)),
        Answer::Select(Some(0)),
        Answer::Multi(None),
    ]);

    let response = app.handle_query("action=add_brainrot&base=Garden");
    assert!(!response.refresh);
    assert_eq!(app.dialog().oks[0].0, "Error");
    assert!(app.dialog().oks[0].1.contains("Garden"));
}

#[test]
fn delete_brainrot_and_no_change() {
    let fixture = Fixture::new();
    fixture.write_bases(
        r#"[{"Name": "Yard", "Brainrots": [{"Id": "fred-gold", "Name": "Fred", "BaseName": "Yard"}]}]"#,
    );
    let mut app = fixture.app(vec![]);

    let response = app.handle_query("action=delete_brainrot&base=Yard&id=ghost");
    assert!(!response.refresh);
    assert_eq!(app.dialog().notices[0].2, NoticeLevel::Warning);

    let response = app.handle_query("action=delete_brainrot&base=Yard&id=fred-gold");
    assert!(response.refresh);
    assert_eq!(fixture.bases_json()[0]["Brainrots"], serde_json::json!([]));
}

#[test]
fn move_brainrot_between_bases() {
    let fixture = Fixture::new();
    fixture.write_bases(
        r#"[
            {"Name": "A", "Brainrots": [{"Id": "fred-gold", "Name": "Fred", "BaseName": "A"}]},
            {"Name": "B", "Brainrots": []}
        ]"#,
    );
    let mut app = fixture.app(vec![Answer::Select(Some(0))]);

    let response = app.handle_query("action=move_brainrot&base=A&id=fred-gold");
    assert!(response.refresh);
    assert_eq!(app.dialog().prompts[0].0, "Move Fred to which base?");
    assert_eq!(app.dialog().prompts[0].1, vec!["B"]);

    let bases = fixture.bases_json();
    assert_eq!(bases[0]["Brainrots"], serde_json::json!([]));
    assert_eq!(bases[1]["Brainrots"][0]["BaseName"], "B");
}

#[test]
fn move_brainrot_to_second_base_with_same_name() {
    let fixture = Fixture::new();
    fixture.write_bases(
        r#"[
            {"Name": "A", "Brainrots": [{"Id": "fred-gold", "Name": "Fred", "BaseName": "A"}]},
            {"Name": "B", "Brainrots": []},
            {"Name": "B", "Brainrots": []}
        ]"#,
    );
    let mut app = fixture.app(vec![Answer::Select(Some(1))]);

    assert!(app.handle_query("action=move_brainrot&base=A&id=fred-gold").refresh);
    assert_eq!(app.dialog().prompts[0].1, vec!["B", "B"]);

    let bases = fixture.bases_json();
    assert_eq!(bases[1]["Brainrots"], serde_json::json!([]));
    assert_eq!(bases[2]["Brainrots"][0]["BaseName"], "B");
}

#[test]
fn move_without_other_base() {
    let fixture = Fixture::new();
    fixture.write_bases(
        r#"[{"Name": "A", "Brainrots": [{"Id": "fred-gold", "Name": "Fred", "BaseName": "A"}]}]"#,
    );
    let mut app = fixture.app(vec![]);

    let response = app.handle_query("action=move_brainrot&base=A&id=fred-gold");
    assert!(!response.refresh);
    assert_eq!(app.dialog().oks[0].0, "No other base");
}

#[test]
fn rename_and_delete_base() {
    let fixture = Fixture::new();
    fixture.write_bases(
        r#"[
            {"Name": "A", "Brainrots": [{"Id": "fred-gold", "Name": "Fred", "BaseName": "A"}]},
            {"Name": "B", "Brainrots": []}
        ]"#,
    );
    let mut app = fixture.app(vec![Answer::Input(Some("Attic"))]);

    assert!(app.handle_query("action=rename_base&name=A").refresh);
    let bases = fixture.bases_json();
    assert_eq!(bases[0]["Name"], "Attic");
    assert_eq!(bases[0]["Brainrots"][0]["BaseName"], "Attic");

    assert!(app.handle_query("action=delete_base&name=B").refresh);
    assert_eq!(fixture.bases_json().as_array().unwrap().len(), 1);

    assert!(!app.handle_query("action=delete_base&name=B").refresh);
    assert_eq!(app.dialog().notices.last().unwrap().2, NoticeLevel::Warning);
}

#[test]
fn empty_base_shows_notice() {
    let fixture = Fixture::new();
    fixture.write_bases(r#"[{"Name": "Yard", "Brainrots": []}]"#);
    let mut app = fixture.app(vec![]);

    let dir = app
        .handle_query("action=show_base_brainrots&base=Yard")
        .directory
        .unwrap();
    assert!(dir.items.is_empty());
    assert_eq!(app.dialog().notices[0].0, "No brainrots");
}

#[test]
fn income_sort_order() {
    let fixture = Fixture::new();
    fixture.write_bases(
        r#"[{"Name": "Yard", "Brainrots": [
            {"Id": "a", "Name": "Low", "BaseIncomePerSecond": 1},
            {"Id": "b", "Name": "High", "BaseIncomePerSecond": 50}
        ]}]"#,
    );
    let mut config = fixture.config();
    config.sort = SortOrder::IncomeDesc;
    let mut app = App::new(config, ScriptedDialog::default());

    let dir = app
        .handle_query("action=show_base_brainrots&base=Yard")
        .directory
        .unwrap();
    assert!(dir.items[0].label.starts_with("High"));
}

#[test]
fn read_errors_become_dialogs() {
    let fixture = Fixture::new();
    let mut app = fixture.app(vec![]);

    assert!(app.handle_query("action=mes_bases").directory.is_none());
    assert_eq!(app.dialog().oks[0].0, "Error");

    fixture.write_bases("[{");
    assert!(app.handle_query("action=mes_bases").directory.is_none());
    assert_eq!(app.dialog().oks[1].0, "JSON Error");
}

#[test]
fn missing_param_and_unknown_action() {
    let fixture = Fixture::new();
    let mut app = fixture.app(vec![]);

    let response = app.handle_query("action=show_base_brainrots");
    assert!(response.directory.is_none());
    assert!(app.dialog().oks[0].1.contains("base"));

    let response = app.handle_query("action=dance");
    assert!(response.directory.is_none());
    assert_eq!(app.dialog().oks.len(), 1);
}

#[test]
fn catalogue_and_traits_views() {
    let fixture = Fixture::new();
    let mut app = fixture.app(vec![]);

    let dir = app.handle_query("action=toutes_les_brainrots").directory.unwrap();
    assert_eq!(dir.items[1].label2, "Rare - $500 - $10/s");
    assert_eq!(dir.items[1].info.year, Some(2024));

    let dir = app.handle_query("action=tous_les_traits").directory.unwrap();
    assert_eq!(dir.items[1].label2, "5X");
}
