/// Integration tests for story transpilation

use ninelives_compiler::{RUNTIME_IMPORTS, TranspileError, transpile_source};
use pretty_assertions::assert_eq;

const SCOPE_RESET: &str = "game.scope = \"g\";";

/// Expected module text for a transpiled body.
fn module(body: &str) -> String {
    format!("{}{}{}", RUNTIME_IMPORTS, body, SCOPE_RESET)
}

#[test]
fn test_empty_source() {
    assert_eq!(transpile_source("").unwrap(), module(""));
}

#[test]
fn test_comments_only() {
    let src = "# This is a comment.\n\
               # This is another comment.\n\
               \n";
    let js = transpile_source(src).unwrap();
    assert_eq!(
        js,
        "import {game, back, visited, GameNode} from \"./game.js\";\n\
         import {story} from \"./story.js\";\n\
         game.scope = \"g\";"
    );
}

#[test]
fn test_comments_are_ignored() {
    let src = "| console.log('this just becomes output.');\n\
               # this is a comment and should be ignored.\n\
               Something seems fishy.\n";
    assert_eq!(
        transpile_source(src).unwrap(),
        module(
            "console.log('this just becomes output.');\n\
             game.say(`Something seems fishy.`);\n"
        )
    );
}

#[test]
fn test_node_and_text() {
    let src = "=d50= It's happening!\n\
               Something seems fishy.\n\
               Then you see the tree fall.\n";
    assert_eq!(
        transpile_source(src).unwrap(),
        module(
            "\n/* =d50= It's happening! */\n\
             game.gameNodes['=g:d50='] =\n\
             new GameNode('=g:d50=').setExecFn(function(game, choice) {\n\
             game.player.location = '=g:d50=';\n\
             game.scope = 'g';\n\
             game.say(`Something seems fishy.\n\
             Then you see the tree fall.`);\n\
             game.scope = 'g';\n\
             });\n"
        )
    );
}

#[test]
fn test_commands() {
    let src = "=d50= It's happening!\n\
               !img img/banner-ch2-s1-west.jpg\n\
               Something seems fishy.\n\
               \n\
               !c Then you see the tree fall.\n";
    assert_eq!(
        transpile_source(src).unwrap(),
        module(
            "\n/* =d50= It's happening! */\n\
             game.gameNodes['=g:d50='] =\n\
             new GameNode('=g:d50=').setExecFn(function(game, choice) {\n\
             game.player.location = '=g:d50=';\n\
             game.scope = 'g';\n\
             game.img(\"img/banner-ch2-s1-west.jpg\");\n\
             game.say(`Something seems fishy.`);\n\
             game.sayWith(\"c\", `Then you see the tree fall.`);\n\
             game.scope = 'g';\n\
             });\n"
        )
    );
}

#[test]
fn test_choices() {
    let src = "=d50= It's happening!\n\
               \n\
               Something seems fishy.\n\
               \n\
               >in-the-pond jump into the pond\n\
               >on-the-shore walk along the shore\n";
    let js = transpile_source(src).unwrap();
    assert_eq!(
        js,
        module(
            "\n/* =d50= It's happening! */\n\
             game.gameNodes['=g:d50='] =\n\
             new GameNode('=g:d50=').setExecFn(function(game, choice) {\n\
             game.player.location = '=g:d50=';\n\
             game.scope = 'g';\n\
             game.say(`Something seems fishy.`);\n\
             game.choose(\n\
             game.choice(\"=g:in-the-pond=\", `jump into the pond`),\n\
             game.choice(\"=g:on-the-shore=\", `walk along the shore`));\n\
             game.scope = 'g';\n\
             });\n"
        )
    );

    let choose_start = js.find("game.choose(").unwrap();
    let choose_end = js[choose_start..].find(");\n").unwrap() + choose_start;
    let block = &js[choose_start..choose_end];
    assert_eq!(block.lines().filter(|line| line.ends_with(',')).count(), 1);
    assert!(!block.ends_with(','));
}

#[test]
fn test_choice_without_node_fails() {
    let err = transpile_source("> I'm a choice without a node.\n").unwrap_err();
    assert!(matches!(err, TranspileError::Fatal { line: 1, .. }));
    assert!(
        err.to_string()
            .contains("Choice (>) found before the beginning of a node.")
    );
}

#[test]
fn test_multi_node_with_all_line_types() {
    let src = "=d50= First Node\n\
               This is some text for the first node.\n\
               !c This is a command.\n\
               >choice1 A choice for the first node.\n\
               \n\
               # comments can go anywhere\n\
               =d51= Second Node\n\
               | console.log('This is some code.');\n\
               This is some text for the second node.\n";
    assert_eq!(
        transpile_source(src).unwrap(),
        module(
            "\n/* =d50= First Node */\n\
             game.gameNodes['=g:d50='] =\n\
             new GameNode('=g:d50=').setExecFn(function(game, choice) {\n\
             game.player.location = '=g:d50=';\n\
             game.scope = 'g';\n\
             game.say(`This is some text for the first node.`);\n\
             game.sayWith(\"c\", `This is a command.`);\n\
             game.choose(\n\
             game.choice(\"=g:choice1=\", `A choice for the first node.`));\n\
             game.scope = 'g';\n\
             });\n\
             \n/* =d51= Second Node */\n\
             game.gameNodes['=g:d51='] =\n\
             new GameNode('=g:d51=').setExecFn(function(game, choice) {\n\
             game.player.location = '=g:d51=';\n\
             game.scope = 'g';\n\
             console.log('This is some code.');\n\
             game.say(`This is some text for the second node.`);\n\
             game.scope = 'g';\n\
             });\n"
        )
    );
}

#[test]
fn test_scope_persists_across_nodes() {
    let src = "=a= Node A\n\
               !scope x\n\
               >stay stay here\n\
               =b= Node B\n\
               >leave go away\n";
    let js = transpile_source(src).unwrap();
    assert_eq!(
        js,
        module(
            "\n/* =a= Node A */\n\
             game.gameNodes['=g:a='] =\n\
             new GameNode('=g:a=').setExecFn(function(game, choice) {\n\
             game.player.location = '=g:a=';\n\
             game.scope = 'g';\n\
             game.scope = \"x\";\n\
             game.choose(\n\
             game.choice(\"=x:stay=\", `stay here`));\n\
             game.scope = 'g';\n\
             });\n\
             \n/* =b= Node B */\n\
             game.gameNodes['=x:b='] =\n\
             new GameNode('=x:b=').setExecFn(function(game, choice) {\n\
             game.player.location = '=x:b=';\n\
             game.scope = 'x';\n\
             game.choose(\n\
             game.choice(\"=x:leave=\", `go away`));\n\
             game.scope = 'g';\n\
             });\n"
        )
    );
}

#[test]
fn test_empty_scope_disables_qualification() {
    let src = "!scope\n=start= Start\n>next\n";
    let js = transpile_source(src).unwrap();
    assert!(js.contains("game.scope = \"\";\n"));
    assert!(js.contains("game.gameNodes['=start=']"));
    assert!(js.contains("game.choice(\"=next=\", `continue`)"));
}

#[test]
fn test_conditional_and_argument_choices() {
    let src = "=hall= The hall\n\
               >cloak:foyer ? cloak.canDrop(); `hang up the cloak`\n\
               >bar walk into the bar; cloak.take()\n";
    let js = transpile_source(src).unwrap();
    assert!(js.contains(
        "game.choose(\n\
         (cloak.canDrop()) ? game.choice(\"=cloak:foyer=\", `hang up the cloak`) : false,\n\
         game.choice(\"=g:bar=\", `walk into the bar`, cloak.take()));\n"
    ));
}

#[test]
fn test_escapes_and_node_pattern_override() {
    let src = "=start= Start\n\
               \\>this is not a choice\n\
               == win ? 'happy' : 'sad'} days ahead\n";
    let js = transpile_source(src).unwrap();
    assert!(js.contains("game.say(`>this is not a choice\n= win ? 'happy' : 'sad'} days ahead`);\n"));
    assert_eq!(js.matches("game.gameNodes").count(), 1);
}

#[test]
fn test_windows_line_endings() {
    let js = transpile_source("=start= Start\r\nHello.\r\n").unwrap();
    assert!(js.contains("/* =start= Start */"));
    assert!(js.contains("game.say(`Hello.`);"));
}

#[test]
fn test_error_line_numbers_count_comments() {
    let src = "# intro\n# more\n>early\n";
    let err = transpile_source(src).unwrap_err();
    assert_eq!(err.line_number(), Some(3));
}

#[test]
fn test_nbsp_line_is_text() {
    let js = transpile_source("=a= A\n\u{a0}\n").unwrap();
    assert!(js.contains("game.say(`\u{a0}`);\n"));
}

#[test]
fn test_nbsp_kept_in_choice_description() {
    let js = transpile_source("=a= A\n>b \u{a0}go\n").unwrap();
    assert!(js.contains("game.choice(\"=g:b=\", `\u{a0}go`)"));
}

#[test]
fn test_carriage_return_line_endings() {
    let js = transpile_source("=a= A\rHello.\r").unwrap();
    assert!(js.contains("\n/* =a= A */\n"));
    assert!(js.contains("game.say(`Hello.`);\n"));
}
