use activity_board_core::{CategoryOption, SortKey, ViewQuery};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    /// Distinct categories with the "All Categories" sentinel first
    pub categories: Vec<CategoryOption>,

    /// Current control state (owned by the screen)
    pub query: ViewQuery,

    /// Emits the full updated query on any control change
    pub on_change: Callback<ViewQuery>,
}

/// Search input, category select and sort select
///
/// Declared inputs of the screen; never synthesized by feature detection.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_search = {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(query.clone().with_search(input.value()));
        })
    };

    let on_category = {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(query.clone().with_category(select.value()));
        })
    };

    let on_sort = {
        let query = props.query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(sort) = select.value().parse::<SortKey>() {
                on_change.emit(query.clone().with_sort(sort));
            }
        })
    };

    html! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="text"
                placeholder="Search activities..."
                value={props.query.search.clone()}
                oninput={on_search}
            />
            <select class="filter-bar__category" onchange={on_category}>
                {for props.categories.iter().map(|option| {
                    html! {
                        <option
                            value={option.value.clone()}
                            selected={option.value == props.query.category}
                        >
                            {option.label.clone()}
                        </option>
                    }
                })}
            </select>
            <select class="filter-bar__sort" onchange={on_sort}>
                <option
                    value={SortKey::Name.as_str()}
                    selected={props.query.sort == SortKey::Name}
                >
                    {"Sort by Name"}
                </option>
                <option
                    value={SortKey::Time.as_str()}
                    selected={props.query.sort == SortKey::Time}
                >
                    {"Sort by Time"}
                </option>
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_carry_sentinel_first() {
        let props = yew::props!(FilterBarProps {
            categories: vec![CategoryOption::all(), CategoryOption::named("Games")],
            query: ViewQuery::default(),
            on_change: Callback::from(|_: ViewQuery| {}),
        });

        assert_eq!(props.categories[0].value, "");
        assert_eq!(props.categories[0].label, "All Categories");
    }

    #[test]
    fn test_query_updates_replace_one_field() {
        let query = ViewQuery::default()
            .with_category("Games")
            .with_sort(SortKey::Time);

        let updated = query.clone().with_search("chess");
        assert_eq!(updated.category, "Games");
        assert_eq!(updated.sort, SortKey::Time);
        assert_eq!(updated.search, "chess");
    }
}
