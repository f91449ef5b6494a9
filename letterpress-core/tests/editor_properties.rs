//! Integration tests for the editing session: concrete editing scenarios and
//! property tests over random mutation sequences.

use std::collections::HashSet;

use letterpress_core::{
    import_text, schema, BlockPatch, BlockVariant, Editor, EditorError, HistoryOutcome,
    ImportConfig,
};
use proptest::prelude::*;

fn variants(editor: &Editor) -> Vec<BlockVariant> {
    editor.blocks().iter().map(|b| b.variant()).collect()
}

// ==========================================================================
// Scenarios
// ==========================================================================

#[test]
fn test_add_heading_undo_redo() {
    let mut editor = Editor::new();
    let id = editor.add(BlockVariant::Heading);
    assert_eq!(editor.blocks().len(), 1);
    assert_eq!(editor.blocks()[0].kind.content(), Some("Your Heading Here"));

    assert_eq!(editor.undo(), HistoryOutcome::Changed);
    assert!(editor.blocks().is_empty());

    assert_eq!(editor.redo(), HistoryOutcome::Changed);
    assert_eq!(editor.blocks()[0].id, id);
}

#[test]
fn test_reorder_paragraph_after_button() {
    let mut editor = Editor::new();
    editor.add(BlockVariant::Paragraph);
    editor.add(BlockVariant::Button);
    editor.reorder(0, 1).expect("reorder");
    assert_eq!(
        variants(&editor),
        vec![BlockVariant::Button, BlockVariant::Paragraph]
    );
}

#[test]
fn test_import_into_editor() {
    let blocks = import_text(
        "Big Sale\n\nEverything 50% off this week only.",
        &ImportConfig::default(),
    );
    let mut editor = Editor::new();
    editor.load_blocks(blocks);
    assert_eq!(
        variants(&editor),
        vec![
            BlockVariant::Heading,
            BlockVariant::Paragraph,
            BlockVariant::Button
        ]
    );
    assert_eq!(editor.blocks()[0].kind.content(), Some("Big Sale"));
    assert_eq!(
        editor.blocks()[1].kind.content(),
        Some("Everything 50% off this week only.")
    );
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut editor = Editor::new();
    let id = editor.add(BlockVariant::Image);
    assert_eq!(editor.document().selected_id(), Some(id));
    editor.delete(id).expect("delete");
    assert_eq!(editor.document().selected_id(), None);
}

#[test]
fn test_duplicate_middle_block() {
    let mut editor = Editor::new();
    editor.add(BlockVariant::Heading);
    let middle = editor.add(BlockVariant::List);
    editor.add(BlockVariant::Divider);

    let copy = editor.duplicate(middle).expect("duplicate");
    let ids: Vec<_> = editor.blocks().iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), 4);
    assert_eq!(ids[1], middle);
    assert_eq!(ids[2], copy);
    assert_ne!(copy, middle);
    assert_eq!(editor.blocks()[1].kind, editor.blocks()[2].kind);
}

#[test]
fn test_stale_delete_is_absorbable() {
    let mut editor = Editor::new();
    let id = editor.add(BlockVariant::Button);
    editor.delete(id).expect("first delete");
    assert!(matches!(
        editor.delete(id),
        Err(EditorError::BlockNotFound(missing)) if missing == id
    ));
    assert!(editor.blocks().is_empty());
}

#[test]
fn test_edit_session_roundtrips_through_schema() {
    let mut editor = Editor::new();
    for variant in BlockVariant::ALL {
        editor.add(variant);
    }
    let list = editor.blocks()[7].id;
    editor
        .update(
            list,
            &BlockPatch {
                items: Some(vec!["Alpha".to_string(), "Beta".to_string()]),
                ..BlockPatch::default()
            },
        )
        .expect("update");

    let json = schema::serialize(editor.blocks()).expect("serialize");
    let restored = schema::deserialize(&json).expect("deserialize");
    assert_eq!(restored, editor.blocks());
    assert!(!json.contains("selected"));
}

// ==========================================================================
// Properties
// ==========================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Update(usize),
    Delete(usize),
    Duplicate(usize),
    Reorder(usize, usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..BlockVariant::ALL.len()).prop_map(Op::Add),
        (0usize..12).prop_map(Op::Update),
        (0usize..12).prop_map(Op::Delete),
        (0usize..12).prop_map(Op::Duplicate),
        (0usize..12, 0usize..13).prop_map(|(from, to)| Op::Reorder(from, to)),
    ]
}

/// Apply `op`, returning whether it changed the document.
fn apply(editor: &mut Editor, op: &Op) -> bool {
    let id_at = |editor: &Editor, i: usize| editor.blocks().get(i).map(|b| b.id);
    match *op {
        Op::Add(v) => {
            editor.add(BlockVariant::ALL[v]);
            true
        }
        Op::Update(i) => id_at(editor, i).is_some_and(|id| {
            editor
                .update(id, &BlockPatch::style("color", format!("#{i:06x}")))
                .is_ok()
        }),
        Op::Delete(i) => id_at(editor, i).is_some_and(|id| editor.delete(id).is_ok()),
        Op::Duplicate(i) => id_at(editor, i).is_some_and(|id| editor.duplicate(id).is_ok()),
        Op::Reorder(from, to) => editor.reorder(from, to).is_ok(),
    }
}

proptest! {
    #[test]
    fn prop_count_matches_operations_and_ids_unique(
        ops in prop::collection::vec(arb_op(), 0..40)
    ) {
        let mut editor = Editor::new();
        let mut expected: usize = 0;

        for op in &ops {
            let changed = apply(&mut editor, op);
            match op {
                Op::Add(_) => expected += 1,
                Op::Duplicate(_) if changed => expected += 1,
                Op::Delete(_) if changed => expected -= 1,
                _ => {}
            }

            prop_assert_eq!(editor.blocks().len(), expected);
            let ids: HashSet<_> = editor.blocks().iter().map(|b| b.id).collect();
            prop_assert_eq!(ids.len(), editor.blocks().len());
            if let Some(selected) = editor.document().selected_id() {
                prop_assert!(editor.document().contains(selected));
            }
        }
    }

    #[test]
    fn prop_undo_redo_inverse(
        setup in prop::collection::vec(arb_op(), 0..15),
        op in arb_op()
    ) {
        let mut editor = Editor::new();
        for op in &setup {
            apply(&mut editor, op);
        }

        let before = editor.blocks().to_vec();
        if apply(&mut editor, &op) {
            let after = editor.blocks().to_vec();
            prop_assert_eq!(editor.undo(), HistoryOutcome::Changed);
            prop_assert_eq!(editor.blocks(), before.as_slice());
            prop_assert_eq!(editor.redo(), HistoryOutcome::Changed);
            prop_assert_eq!(editor.blocks(), after.as_slice());
        } else {
            prop_assert_eq!(editor.blocks(), before.as_slice());
        }
    }

    #[test]
    fn prop_new_mutation_discards_redo(
        setup in prop::collection::vec(arb_op(), 1..15),
        variant in 0..BlockVariant::ALL.len()
    ) {
        let mut editor = Editor::new();
        for op in &setup {
            apply(&mut editor, op);
        }
        prop_assume!(editor.can_undo());

        editor.undo();
        editor.add(BlockVariant::ALL[variant]);
        prop_assert_eq!(editor.redo(), HistoryOutcome::NoOp);
    }

    #[test]
    fn prop_duplicate_is_adjacent(
        count in 1usize..10,
        pick in 0usize..10
    ) {
        let mut editor = Editor::new();
        for i in 0..count {
            editor.add(BlockVariant::ALL[i % BlockVariant::ALL.len()]);
        }
        let index = pick % count;
        let source = editor.blocks()[index].id;

        let copy = editor.duplicate(source).expect("duplicate");
        prop_assert_eq!(editor.document().position(copy), Some(index + 1));
        prop_assert_eq!(editor.document().position(source), Some(index));
        prop_assert_eq!(&editor.blocks()[index].kind, &editor.blocks()[index + 1].kind);
    }
}
