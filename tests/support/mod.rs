// Shared helpers for driving the headless host from integration tests.
use toolgun::HeadlessTool;
use toolgun::domain::{ToolConfig, ToolSettings};
use toolgun::interface_adapters::permissions::AllowList;

pub const ADMIN: u64 = 7;

// Headless tool with a build template and `ADMIN` as the only permitted actor.
pub fn tool(config: ToolConfig) -> HeadlessTool {
    let settings = ToolSettings::try_from(config).expect("test config should validate");
    let admins = AllowList::new(settings.permission.clone(), [ADMIN]);
    toolgun::build_tool(settings, admins)
}

pub fn config_with_template() -> ToolConfig {
    ToolConfig {
        build_template: Some("crate".to_string()),
        ..ToolConfig::default()
    }
}

// Runs newline-delimited host messages through the host loop and returns the tool.
pub async fn play(tool: HeadlessTool, script: &[String]) -> HeadlessTool {
    let input = script.join("\n");
    toolgun::run(tool, input.as_bytes())
        .await
        .expect("host run should succeed")
}

pub fn verified(actor: u64) -> String {
    format!(r#"{{"type":"Verified","data":{{"actor":{actor}}}}}"#)
}

// Fire from `origin` along `forward`.
pub fn fired(actor: u64, origin: [f64; 3], forward: [f64; 3], mode_key: bool) -> String {
    format!(
        r#"{{"type":"Fired","data":{{"actor":{actor},"origin":[{},{},{}],"forward":[{},{},{}],"mode_key":{mode_key}}}}}"#,
        origin[0], origin[1], origin[2], forward[0], forward[1], forward[2]
    )
}

pub fn undo(actor: u64) -> String {
    format!(r#"{{"type":"Undo","data":{{"actor":{actor}}}}}"#)
}

pub fn redo(actor: u64) -> String {
    format!(r#"{{"type":"Redo","data":{{"actor":{actor}}}}}"#)
}
