/// Reusable form pieces

use crate::category::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LabeledInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
}

/// Single-line text input with its label above it
#[function_component(LabeledInput)]
pub fn labeled_input(props: &LabeledInputProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                onchange.emit(input.value());
            }
        })
    };

    html! {
        <>
            <label class="field-label">{props.label.clone()}</label>
            <input
                type="text"
                class="field-input"
                placeholder={props.label.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
    pub selected: Option<Category>,
    pub onchange: Callback<Option<Category>>,
}

/// Category dropdown. The shown choice is driven through the element's
/// `value` property so it follows `selected` even after the user has picked
/// an option by hand.
#[function_component(CategorySelect)]
pub fn category_select(props: &CategorySelectProps) -> Html {
    let select_ref = use_node_ref();

    {
        let select_ref = select_ref.clone();
        use_effect_with(props.selected, move |selected| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                sync_select(&select, *selected);
            }
            || ()
        });
    }

    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                onchange.emit(Category::from_option_value(&select.value()));
            }
        })
    };

    html! {
        <>
            <label class="field-label">{"Category"}</label>
            <select class="field-input" ref={select_ref} {onchange}>
                <option value="">{"Select a category"}</option>
                {for Category::ALL.iter().map(|category| html! {
                    <option key={category.name()} value={category.name()}>
                        {category.display_text()}
                    </option>
                })}
            </select>
        </>
    }
}

fn sync_select(select: &HtmlSelectElement, selected: Option<Category>) {
    select.set_value(Category::option_value(selected));
}

#[derive(Properties, PartialEq)]
pub struct ContentAreaProps {
    pub value: AttrValue,
    pub onchange: Callback<String>,
}

#[function_component(ContentArea)]
pub fn content_area(props: &ContentAreaProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                onchange.emit(area.value());
            }
        })
    };

    html! {
        <>
            <label class="field-label">{"Content"}</label>
            <textarea
                class="field-input"
                placeholder="Event content"
                value={props.value.clone()}
                {oninput}
            />
        </>
    }
}

/// Spinning arc shown in the submit button while a request is in flight
#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <svg
            class="loader-spin"
            xmlns="http://www.w3.org/2000/svg"
            width="1em"
            height="1em"
            viewBox="0 0 24 24"
        >
            <path fill="currentColor" d="M12 3a9 9 0 0 1 9 9h-2a7 7 0 0 0-7-7z"></path>
        </svg>
    }
}
