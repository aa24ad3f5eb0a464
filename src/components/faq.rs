use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
    Expanded,
    #[default]
    Collapsed,
}

impl Expansion {
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Expanded => Expansion::Collapsed,
            Expansion::Collapsed => Expansion::Expanded,
        }
    }

    /// Value for `aria-expanded`, mirrored on the item and its button.
    pub fn aria(self) -> &'static str {
        match self {
            Expansion::Expanded => "true",
            Expansion::Collapsed => "false",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// One accordion entry. Items are independent: opening one leaves the
/// others as they are.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let expansion = use_state(Expansion::default);

    let toggle = {
        let expansion = expansion.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expansion.set(expansion.toggled());
        })
    };

    html! {
        <div class="faq__item" aria-expanded={expansion.aria()}>
            <button class="faq__q" aria-expanded={expansion.aria()} onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if *expansion == Expansion::Expanded { "−" } else { "+" } }</span>
            </button>
            <div class="faq__a">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        assert_eq!(Expansion::default().aria(), "false");
    }

    #[test]
    fn toggles_back_and_forth() {
        let open = Expansion::default().toggled();
        assert_eq!(open.aria(), "true");
        assert_eq!(open.toggled(), Expansion::Collapsed);
    }
}
