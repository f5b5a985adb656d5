#![cfg(test)]
use sapconv_common::config::Config;
use sapconv_core::pipeline;
use std::fs;
use std::path::Path;

/// A realistic Sapphire.js command module, as shipped in JS bot
/// codebases: CommonJS require, constructor options, both lifecycle
/// methods.
const PING_COMMAND: &str = r#"const { Command } = require('@sapphire/framework');

class PingCommand extends Command {
	constructor(context, options) {
		super(context, {
			...options,
			description: 'Ping bot to see if it is alive'
		});
	}

	registerApplicationCommands(registry) {
		registry.registerChatInputCommand((builder) =>
			builder.setName(this.name).setDescription(this.description)
		);
	}

	async chatInputRun(interaction) {
		return interaction.reply('Pong!');
	}
}

module.exports = { PingCommand };
"#;

fn write_fixture(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

/// This test mirrors the documented batch contract: given `a.js`,
/// `sub/b.js` and `c.txt` under the source root, the target root must
/// receive `a.ts` and `sub/b.ts` and nothing else.
#[tokio::test]
async fn directory_conversion_mirrors_the_tree() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("src").join("commands");
    let target = dir.path().join("dist").join("commands");

    write_fixture(&source.join("a.js"), PING_COMMAND);
    write_fixture(
        &source.join("sub").join("b.js"),
        "class B extends Command {\n}\n",
    );
    write_fixture(&source.join("c.txt"), "not a command");

    let cfg = Config::default();
    let written = pipeline::convert_directory(&source, Some(&target), &cfg)
        .await
        .unwrap();

    assert_eq!(written, 2, "exactly the two .js files are converted");
    assert!(target.join("a.ts").exists());
    assert!(target.join("sub").join("b.ts").exists());
    assert!(!target.join("c.txt").exists(), "non-JS files are not copied");
    assert!(source.join("c.txt").exists(), "non-JS files are not touched");
}

#[tokio::test]
async fn empty_directory_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("commands");
    fs::create_dir_all(&source).unwrap();

    let written = pipeline::convert_directory(&source, None, &Config::default())
        .await
        .unwrap();
    assert_eq!(written, 0);
}

#[tokio::test]
async fn converted_output_carries_the_full_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ping.js");
    write_fixture(&input, PING_COMMAND);

    let written = pipeline::convert_file(&input, None, &Config::default())
        .await
        .unwrap()
        .expect("file should be written");

    assert_eq!(written, dir.path().join("ping.ts"));
    let out = fs::read_to_string(&written).unwrap();

    assert!(out.starts_with(
        "import { ApplyOptions } from \"@sapphire/decorators\";"
    ));
    assert!(out.contains(
        "@ApplyOptions<Command.Options>({ description: \"Ping bot to see if it is alive\" })"
    ));
    assert!(out.contains("class UserCommand extends Command {"));
    assert!(
        out.contains("module.exports = { UserCommand };"),
        "exported references must follow the rename: {out}"
    );
    assert!(!out.contains("PingCommand"));
    assert!(!out.contains("constructor("));
    assert!(out.contains(
        "public override registerApplicationCommands(registry: Command.Registry)"
    ));
    assert!(out.contains(
        "public override async chatInputRun(interaction: Command.ChatInputCommandInteraction)"
    ));
}

#[tokio::test]
async fn existing_output_is_left_alone_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ping.js");
    let output = dir.path().join("ping.ts");
    write_fixture(&input, PING_COMMAND);
    write_fixture(&output, "// already converted by hand");

    let cfg = Config {
        overwrite: false,
        replace: false,
    };
    let written = pipeline::convert_file(&input, None, &cfg).await.unwrap();

    assert!(written.is_none(), "conversion must be skipped");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "// already converted by hand"
    );
}

#[tokio::test]
async fn replace_removes_the_original_after_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ping.js");
    write_fixture(&input, PING_COMMAND);

    let cfg = Config {
        overwrite: true,
        replace: true,
    };
    let written = pipeline::convert_file(&input, None, &cfg).await.unwrap();

    assert!(written.is_some());
    assert!(dir.path().join("ping.ts").exists());
    assert!(!input.exists(), "--replace must delete the input .js");
}

#[tokio::test]
async fn input_path_without_extension_is_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ping.js");
    write_fixture(&input, PING_COMMAND);

    let written = pipeline::convert_file(&dir.path().join("ping"), None, &Config::default())
        .await
        .unwrap();
    assert_eq!(written, Some(dir.path().join("ping.ts")));
}

#[tokio::test]
async fn missing_input_aborts_the_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let result = pipeline::convert_file(&dir.path().join("gone.js"), None, &Config::default()).await;
    assert!(result.is_err());
    assert!(!dir.path().join("gone.ts").exists());
}
