pub(crate) const COMPLETIONS_HELP: &str = r#"Generate a completion script and source it from your shell's startup file.

Example (bash):
    carelaunch completions bash > ~/.local/share/bash-completion/completions/carelaunch"#;
