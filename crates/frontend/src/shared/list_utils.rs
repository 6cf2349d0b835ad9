/// Утилиты для списков: поиск с debounce и индикаторы сортировки
use contracts::shared::list_query::SortDirection;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Пауза после последнего нажатия клавиши перед запуском поиска
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Текст поля поиска и номер поколения для debounce.
///
/// Every local edit or external reset bumps the generation, so a timer armed
/// for an older generation never reports its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebounce {
    text: String,
    generation: u64,
}

impl SearchDebounce {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generation: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Keystroke: returns the ticket the debounce timer must present
    pub fn edit(&mut self, text: impl Into<String>) -> u64 {
        self.text = text.into();
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }

    /// Query changed outside the input (e.g. "Clear all"). Returns `false`
    /// when the box already shows that text.
    pub fn sync_external(&mut self, external: &str) -> bool {
        if self.text == external {
            return false;
        }
        self.text = external.to_string();
        self.generation += 1;
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.generation += 1;
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение запроса (из состояния списка)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления запроса
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let debounce = RwSignal::new(SearchDebounce::new(value.get_untracked()));

    // внешний сброс запроса переписывает поле и отменяет ожидающий таймер
    Effect::new(move |_| {
        let external = value.get();
        debounce.maybe_update(|d| d.sync_external(&external));
    });

    let handle_input_change = move |new_value: String| {
        let Some(ticket) = debounce.try_update(|d| d.edit(new_value.clone())) else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // a newer keystroke, an external reset or an unmounted input wins
            if debounce.try_with_untracked(|d| d.is_current(ticket)) == Some(true) {
                on_change.run(new_value);
            }
        });
    };

    let input_value = move || debounce.with(|d| d.text().to_string());
    let is_query_active = move || !value.get().trim().is_empty();

    let clear = move |_| {
        debounce.update(SearchDebounce::clear);
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_query_active() { "#fffbea" } else { "white" }
                )
                prop:value=input_value
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if debounce.with(|d| !d.text().is_empty()) {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, sort: SortDirection) -> &'static str {
    if current_field != field {
        return " ⇅";
    }
    match sort {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_keystroke_supersedes_pending_one() {
        let mut d = SearchDebounce::new("");
        let first = d.edit("smi");
        let second = d.edit("smith");
        assert!(!d.is_current(first));
        assert!(d.is_current(second));
    }

    #[test]
    fn test_external_reset_shows_new_text() {
        let mut d = SearchDebounce::new("");
        let ticket = d.edit("smith");
        // the timer fired and the list committed "smith"
        assert!(!d.sync_external("smith"));
        assert!(d.is_current(ticket));

        // "Clear all" resets the query
        assert!(d.sync_external(""));
        assert_eq!(d.text(), "");
        let next = d.edit("x");
        assert_eq!(d.text(), "x");
        assert!(d.is_current(next));
    }

    #[test]
    fn test_external_reset_cancels_pending_timer() {
        let mut d = SearchDebounce::new("");
        let ticket = d.edit("smi");
        // cleared before the debounce elapsed: committed query is still ""
        assert!(d.sync_external(""));
        assert!(!d.is_current(ticket));
        assert_eq!(d.text(), "");
    }

    #[test]
    fn test_clear_button_cancels_pending_timer() {
        let mut d = SearchDebounce::new("smith");
        let ticket = d.edit("smithx");
        d.clear();
        assert!(!d.is_current(ticket));
        assert!(d.text().is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", SortDirection::Asc), " ▲");
        assert_eq!(get_sort_indicator("name", "name", SortDirection::Desc), " ▼");
        assert_eq!(get_sort_indicator("name", "status", SortDirection::Desc), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert!(get_sort_class("name", "name").ends_with("--active"));
        assert_eq!(get_sort_class("name", "status"), "table__sort-icon");
    }
}
