/// Утилиты для списков админки: поиск с debounce и подсветка совпадений
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::config::SEARCH_DEBOUNCE_MS;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of `filter`.
///
/// The filter is matched as typed, like the list search; a whitespace-only
/// filter highlights nothing. Only ASCII-insensitive matching keeps offsets
/// valid for `text`, which is all the seed data needs.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.trim().is_empty() {
        return Vec::new();
    }
    let needle = filter.to_ascii_lowercase();
    let haystack = text.to_ascii_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Компонент поиска с debounce и кнопкой очистки
///
/// `on_change` fires `SEARCH_DEBOUNCE_MS` after the last keystroke; clearing
/// fires it at once.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    // term set from outside (query string)
    Effect::new(move |_| {
        let current = value.get();
        if input_value.get_untracked() != current {
            set_input_value.set(current);
        }
    });

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{super::icons::icon("search")}</span>
            <input
                type="text"
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {super::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("John Johnson", "john"), vec![(0, 4), (5, 9)]);
        assert_eq!(match_ranges("PC Troubleshooting", "TROUBLE"), vec![(3, 10)]);
    }

    #[test]
    fn test_match_ranges_keeps_surrounding_spaces() {
        assert_eq!(match_ranges("John Doe", "john "), vec![(0, 5)]);
        assert!(match_ranges("Sarah Johnson", "john ").is_empty());
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("anything", "").is_empty());
        assert!(match_ranges("anything", "   ").is_empty());
        assert!(match_ranges("anything", "zzz").is_empty());
    }
}
