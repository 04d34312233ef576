use serde_json::json;
use siftcss::{TreeNode, compile_tokens, critical_css, resolve, stylesheet_for};

/// Helper to build a tree from inline JSON.
fn tree(value: serde_json::Value) -> TreeNode {
    serde_json::from_value(value).expect("valid tree")
}

fn page_tree() -> TreeNode {
    tree(json!({
        "type": "div",
        "props": { "className": "container mx-auto p-4 bg-white" },
        "children": [
            {
                "type": "header",
                "props": { "className": "flex items-center justify-between" },
                "children": [
                    {
                        "type": "h1",
                        "props": { "className": "text-2xl font-bold text-gray-900" },
                        "children": ["Sift"]
                    },
                    {
                        "type": "nav",
                        "props": { "class": "hidden md:flex gap-x-2" },
                        "children": [
                            {
                                "type": "a",
                                "props": { "className": "hover:bg-blue-600 rounded p-4" },
                                "children": ["Docs"]
                            }
                        ]
                    }
                ]
            },
            {
                "type": "main",
                "props": { "className": "w-1/2 -mt-4 bg-blue-500/50 dark:bg-gray-900" },
                "children": ["Body copy"]
            }
        ]
    }))
}

#[test]
fn tree_to_stylesheet_covers_every_used_token() {
    let css = stylesheet_for(&page_tree());

    // Atomic rules.
    assert!(css.contains("padding: 1rem"));
    assert!(css.contains("display: flex"));
    assert!(css.contains("align-items: center"));
    assert!(css.contains("font-size: 1.5rem"));
    assert!(css.contains("background-color: #ffffff"));
    assert!(css.contains("width: 50.000000%"));
    assert!(css.contains("margin-top: -1rem"));
    assert!(css.contains("background-color: rgba(59, 130, 246, 0.5)"));

    // Variant and responsive rules.
    assert!(css.contains(".hover\\:bg-blue-600:hover"));
    assert!(css.contains("@media (min-width: 768px)"));
    assert!(css.contains(".dark .dark\\:bg-gray-900"));
    assert!(css.contains("@media (prefers-color-scheme: dark)"));

    // "container" is not a recognized utility and is silently skipped.
    assert!(!css.contains("container"));
}

#[test]
fn shared_tokens_are_emitted_once() {
    // `p-4` appears on two nodes of the page tree.
    let css = stylesheet_for(&page_tree());
    assert_eq!(css.matches(".p-4 {").count(), 1);
}

#[test]
fn compilation_is_deterministic() {
    let first = stylesheet_for(&page_tree());
    let second = stylesheet_for(&page_tree());
    assert_eq!(first, second);
}

#[test]
fn empty_tree_compiles_to_empty_stylesheet() {
    let root = tree(json!({ "type": "div", "children": ["text only"] }));
    assert_eq!(stylesheet_for(&root), "");
}

#[test]
fn critical_css_is_stable_and_separate() {
    assert_eq!(critical_css(), critical_css());
    assert!(critical_css().contains("box-sizing: border-box"));
    assert!(critical_css().contains("@keyframes spin"));
    // The compiled utilities never duplicate the reset.
    let css = compile_tokens(["flex", "p-4"]);
    assert!(!css.contains("box-sizing"));
}

#[test]
fn resolve_contract_examples() {
    let rule = resolve("bg-blue-500").unwrap();
    assert!(rule.declarations.contains("background-color"));
    assert!(rule.declarations.contains("#3b82f6"));

    let rule = resolve("bg-blue-500/50").unwrap();
    assert!(rule.declarations.contains("rgba"));
    assert!(rule.declarations.contains("0.5"));

    assert_eq!(resolve("p-4").unwrap().declarations, "padding: 1rem");
    assert_eq!(resolve("-mt-4").unwrap().declarations, "margin-top: -1rem");
    assert_eq!(resolve("rounded-full").unwrap().declarations, "border-radius: 9999px");

    let rule = resolve("md:hover:bg-blue-600").unwrap();
    assert_eq!(rule.media_query.as_deref(), Some("(min-width: 768px)"));
    assert!(rule.selector.contains(":hover"));

    assert!(resolve("unknown-class-xyz").is_none());
}

#[test]
fn media_blocks_group_in_first_seen_order() {
    let css = compile_tokens(["lg:grid", "md:hidden", "lg:flex"]);
    let lg = css.find("(min-width: 1024px)").unwrap();
    let md = css.find("(min-width: 768px)").unwrap();
    assert!(lg < md);
    assert_eq!(css.matches("@media").count(), 2);
}
