use dioxus::events::Key;
use dioxus::prelude::*;
use formatted_comments_engine::editing::offsets::{byte_to_utf16, utf16_to_byte};
use formatted_comments_engine::{
    Editor, FORMATTING_HINT, FormatKind, FormattedContent, KeyPress, Keymap,
};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::FormattingToolbar;

static NEXT_TEXTAREA_ID: AtomicUsize = AtomicUsize::new(0);

/// Comment box with a formatting toolbar and Ctrl/Cmd shortcuts.
///
/// Controlled by `value`: every change (typing, toolbar, shortcut) is
/// reported through `on_change` as the new raw text plus its parsed content.
#[component]
pub fn FormattedTextarea(
    value: String,
    on_change: EventHandler<(String, FormattedContent)>,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] disabled: bool,
    #[props(default)] keymap: Keymap,
) -> Element {
    let textarea_id = use_hook(|| {
        format!(
            "formatted-textarea-{}",
            NEXT_TEXTAREA_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let mut editor = use_signal(|| Editor::new(value.clone()).with_keymap(keymap));

    // Parent-driven changes, e.g. clearing the box after submit
    use_effect(use_reactive!(|value| {
        if editor.peek().text() != value {
            editor.write().input(value);
        }
    }));

    let format = {
        let textarea_id = textarea_id.clone();
        move |kind: FormatKind| {
            let textarea_id = textarea_id.clone();
            spawn(async move {
                apply_to_selection(kind, &textarea_id, editor, on_change).await;
            });
        }
    };
    let toolbar_format = format.clone();

    rsx! {
        div {
            class: "formatted-textarea",
            FormattingToolbar {
                disabled,
                keymap,
                on_format: move |kind| toolbar_format(kind),
            }
            textarea {
                id: "{textarea_id}",
                class: "formatted-textarea-input",
                value: "{editor.read().text()}",
                placeholder: "{placeholder}",
                rows: "{rows}",
                disabled,
                oninput: move |event: Event<FormData>| {
                    let mut editor = editor.write();
                    editor.input(event.value());
                    on_change.call((editor.text().to_string(), editor.content().clone()));
                },
                onkeydown: move |event: Event<KeyboardData>| {
                    let Some(press) = key_press(&event) else {
                        return;
                    };
                    if let Some(kind) = keymap.resolve(&press) {
                        event.prevent_default();
                        format(kind);
                    }
                },
            }
            p {
                class: "formatting-hint",
                "{FORMATTING_HINT}"
            }
        }
    }
}

/// Single-character key presses with their modifiers, in engine form.
fn key_press(event: &KeyboardData) -> Option<KeyPress> {
    let Key::Character(text) = event.key() else {
        return None;
    };
    let mut chars = text.chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        return None;
    };

    let modifiers = event.modifiers();
    Some(KeyPress {
        key,
        ctrl: modifiers.ctrl(),
        meta: modifiers.meta(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
    })
}

/// Read the DOM selection, apply `kind` to it and restore the caret.
async fn apply_to_selection(
    kind: FormatKind,
    textarea_id: &str,
    mut editor: Signal<Editor>,
    on_change: EventHandler<(String, FormattedContent)>,
) {
    let script = format!(
        r#"const el = document.getElementById("{textarea_id}");
if (!el) {{ return null; }}
return [el.selectionStart, el.selectionEnd];"#
    );

    // Web text areas report UTF-16 code units
    let (start, end) = match document::eval(&script)
        .join::<Option<(usize, usize)>>()
        .await
    {
        Ok(Some(selection)) => selection,
        Ok(None) => {
            log::warn!("Text area {textarea_id} is not mounted");
            return;
        }
        Err(e) => {
            log::warn!("Failed to read selection from {textarea_id}: {e}");
            return;
        }
    };

    let update = {
        let mut editor = editor.write();
        let range = utf16_to_byte(editor.text(), start)..utf16_to_byte(editor.text(), end);

        match editor.select(range).and_then(|()| editor.apply(kind)) {
            Ok(Some(patch)) => Some((patch, editor.content().clone())),
            Ok(None) => None,
            Err(e) => {
                log::warn!("{} not applied: {e}", kind.label());
                None
            }
        }
    };

    let Some((patch, content)) = update else {
        return;
    };
    let caret = byte_to_utf16(&patch.new_text, patch.new_cursor);
    on_change.call((patch.new_text, content));
    restore_caret(textarea_id, caret);
}

/// Refocus the text area once the new value has been rendered.
///
/// Fire-and-forget: a text area that has gone away is silently ignored.
fn restore_caret(textarea_id: &str, caret_utf16: usize) {
    let _ = document::eval(&format!(
        r#"setTimeout(() => {{
  const el = document.getElementById("{textarea_id}");
  if (el) {{
    el.focus();
    el.setSelectionRange({caret_utf16}, {caret_utf16});
  }}
}}, 0);"#
    ));
}
