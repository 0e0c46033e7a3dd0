//! End-to-end tests for the text layer over the arena.
//!
//! These mirror how the frontend uses the core: a persistent arena for
//! session state, a scratch scope per request, stripped input lines, and
//! fragment lists joined into protocol commands.

use zero_arena::Arena;
use zero_text::{JoinOptions, Text, TextList, chars};

/// Helper mirroring the frontend's line intake: intern, then strip.
fn take_line(arena: &mut Arena, raw: &str) -> Text {
    let line = Text::intern(arena, raw);
    line.strip(arena)
}

#[test]
fn test_command_line_assembly() {
    let mut arena = Arena::new();

    let mut parts = TextList::new();
    for part in ["-break-insert", "--source", "main.c", "--line", "42"] {
        let t = Text::intern(&mut arena, part);
        parts.push(t);
    }
    let opts = JoinOptions {
        separator: Text::intern(&mut arena, " "),
        ..JoinOptions::default()
    };
    let command = parts.join(&mut arena, &opts);
    assert_eq!(
        command.as_str(&arena),
        Some("-break-insert --source main.c --line 42")
    );

    let wire = command.to_nul_terminated(&mut arena);
    assert_eq!(chars::cstr_len(wire.bytes(&arena)), command.len());
}

#[test]
fn test_scratch_scope_per_request() {
    let mut arena = Arena::new();
    let session_name = Text::intern(&mut arena, "gdb-session");

    for _ in 0..8 {
        let baseline = arena.len();
        arena.scoped(|scratch| {
            let line = take_line(scratch, "  *stopped,reason=\"breakpoint-hit\"  \r\n");
            assert_eq!(line.bytes(scratch), b"*stopped,reason=\"breakpoint-hit\"");
        });
        assert_eq!(arena.len(), baseline);
    }
    // Session state outlives every scratch scope.
    assert_eq!(session_name.bytes(&arena), b"gdb-session");
}

#[test]
fn test_output_line_parsing_flow() {
    let mut arena = Arena::new();
    let line = take_line(&mut arena, "^done,value=\"42\"\n");

    // Classify the record type from the first byte.
    let first = line.bytes(&arena)[0];
    assert!(chars::is_symbol(first));

    let status = line.substring(&mut arena, 1, 4);
    let expected = Text::intern(&mut arena, "done");
    assert!(status.content_eq(expected, &arena));
}

#[test]
fn test_backspace_editing_via_pop() {
    // The input box builds its buffer as a fragment list; backspace pops.
    let mut arena = Arena::new();
    let mut typed = TextList::new();
    for key in ["r", "u", "m"] {
        let t = Text::intern(&mut arena, key);
        typed.push(t);
    }
    typed.pop();
    let n = Text::intern(&mut arena, "n");
    typed.push(n);

    let joined = typed.join(&mut arena, &JoinOptions::default());
    assert_eq!(joined.bytes(&arena), b"run");
    assert_eq!(typed.total_len(), 3);
}

#[test]
fn test_handles_survive_arena_growth() {
    let mut arena = Arena::with_capacity(32).unwrap();
    let early = Text::intern(&mut arena, "watchpoint");
    // Push the arena through several growth doublings.
    let mut filler = TextList::new();
    for _ in 0..64 {
        let t = Text::intern(&mut arena, "0123456789abcdef0123456789abcdef");
        filler.push(t);
    }
    let sep = Text::intern(&mut arena, ",");
    let big = filler.join(
        &mut arena,
        &JoinOptions {
            separator: sep,
            ..JoinOptions::default()
        },
    );
    assert_eq!(big.len(), 64 * 32 + 63);
    assert_eq!(early.bytes(&arena), b"watchpoint");
}

#[test]
fn test_handle_serialization_round_trip() {
    let mut arena = Arena::new();
    let t = Text::intern(&mut arena, "persisted");
    let json = serde_json::to_string(&t).unwrap();
    let back: Text = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
    assert_eq!(back.bytes(&arena), b"persisted");
}
