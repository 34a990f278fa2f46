//! Integration tests for inkdown.
//!
//! These tests convert whole documents through the public API and run
//! the `inkd` binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

use inkdown_config::Config;
use inkdown_core::Options;
use inkdown_parser::{markdown_to_html, markdown_to_html_with, Converter};

const DOCUMENT: &str = r#"# Inkdown

Some **bold** text and a [link](http://x.test "Home").

> quoted line
> more

* one
* two
  1. nested

```rust
let x = 1 < 2;
```

| a | b |
|---|:-:|
| 1 | 2 |

---
"#;

fn inkd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_inkd"))
}

// =============================================================================
// Document Tests
// =============================================================================

#[test]
fn test_full_document() {
    let html = markdown_to_html(DOCUMENT);

    assert!(html.starts_with("<h1>Inkdown</h1>"));
    assert!(html.contains(
        "<p>Some <strong>bold</strong> text and a \
         <a href=\"http://x.test\">link</a>.</p>"
    ));
    assert!(html.contains("<blockquote>quoted line\nmore</blockquote>"));
    assert!(html.contains("<ul><li>one</li><li>two<ol><li>nested</li></ol></li></ul>"));
    assert!(html.contains("<pre><code class=\"language-rust\">let x = 1 &lt; 2;</code></pre>"));
    assert!(html.contains(
        "<table><tr><th>a</th><th align=\"center\">b</th></tr>\
         <tr><td>1</td><td align=\"center\">2</td></tr></table>"
    ));
    assert!(html.ends_with("<hr>"));
}

#[test]
fn test_blocks_keep_their_order() {
    let html = markdown_to_html(DOCUMENT);
    let positions: Vec<usize> = ["<h1>", "<p>", "<blockquote>", "<ul>", "<pre>", "<table>", "<hr>"]
        .iter()
        .map(|tag| html.find(tag).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_plain_text() {
    assert_eq!(markdown_to_html("just words"), "<p>just words</p>");
    assert_eq!(markdown_to_html("<"), "<p>&lt;</p>");
    assert_eq!(markdown_to_html("&lt; stays"), "<p>&lt; stays</p>");
}

#[test]
fn test_inline_properties() {
    assert_eq!(
        markdown_to_html("**a *b* c**"),
        "<p><strong>a <em>b</em> c</strong></p>"
    );
    assert_eq!(markdown_to_html("`**bold**`"), "<p><code>**bold**</code></p>");
    assert_eq!(
        markdown_to_html("~sub~ ^sup^ ~~gone~~ --small-- ++big++"),
        "<p><sub>sub</sub> <sup>sup</sup> <s>gone</s> <small>small</small> <big>big</big></p>"
    );
}

#[test]
fn test_headings() {
    assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>");
    assert_eq!(markdown_to_html("###### Sub ###"), "<h6>Sub</h6>");
    assert_eq!(
        markdown_to_html("> # Quoted"),
        "<blockquote><h1>Quoted</h1></blockquote>"
    );
}

#[test]
fn test_link() {
    assert_eq!(
        markdown_to_html("[text](http://x.test)"),
        "<p><a href=\"http://x.test\">text</a></p>"
    );
    assert_eq!(
        markdown_to_html("[text](http://x.test \"T\")"),
        "<p><a href=\"http://x.test\">text</a></p>"
    );
}

#[test]
fn test_markers_inside_links_are_kept() {
    assert_eq!(
        markdown_to_html("[a](http://x.test/*b*)"),
        "<p><a href=\"http://x.test/*b*\">a</a></p>"
    );
}

#[test]
fn test_code_is_not_reprocessed() {
    let html = markdown_to_html("```\n[x](y) \\* # h\n> q\n```");
    assert_eq!(html, "<pre><code>[x](y) \\* # h\n&gt; q</code></pre>");
}

#[test]
fn test_unterminated_fence_is_text() {
    assert_eq!(markdown_to_html("```\ncode"), "<p>```\ncode</p>");
}

#[test]
fn test_lettered_and_numbered_lists() {
    assert_eq!(
        markdown_to_html("b) two\nc) three"),
        "<ol start=\"2\" type=\"a\"><li>two</li><li>three</li></ol>"
    );
    assert_eq!(
        markdown_to_html("5. five\n\n6. six"),
        "<ol start=\"5\"><li>five</li><li>six</li></ol>"
    );
}

#[test]
fn test_options_from_config() {
    let config = Config::parse("[features]\nTables = false\n[render]\nLanguageClass = false").unwrap();
    let options = config.options();
    let html = markdown_to_html_with("```js\nx\n```\n\n| a |\n|---|", &options);
    assert_eq!(html, "<pre><code>x</code></pre>\n\n<p>| a |\n|---|</p>");
}

#[test]
fn test_converter_is_shareable() {
    let converter = std::sync::Arc::new(Converter::with_options(Options::default()));
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let converter = std::sync::Arc::clone(&converter);
            std::thread::spawn(move || converter.convert(&format!("# {n}")))
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<h1>{n}</h1>"));
    }
}

// =============================================================================
// Binary Tests
// =============================================================================

#[test]
fn test_binary_reads_stdin() {
    let mut child = inkd()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# Hi\n\n*there*\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<h1>Hi</h1>\n\n<p><em>there</em></p>\n"
    );
}

#[test]
fn test_binary_converts_files_to_output() {
    let dir = std::env::temp_dir().join(format!("inkdown-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.md");
    let output = dir.join("out.html");
    std::fs::write(&input, "| a |\n|---|\n").unwrap();

    let status = inkd()
        .arg("--no-tables")
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<p>| a |\n|---|</p>\n"
    );
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_binary_fails_on_missing_file() {
    let output = inkd().arg("/definitely/not/here.md").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERROR]"));
}

#[test]
fn test_binary_fails_on_bad_config() {
    let output = inkd()
        .args(["-c", "[render]\nMaxDepth = \"x\""])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_binary_paths() {
    let output = inkd().arg("--paths").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("paths:"));
}
