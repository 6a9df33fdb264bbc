use isukuhub_model::Prompt;
use isukuhub_model::genai::ask_or_apologize;
use yew::prelude::*;

use super::use_scoped_spawner;
use crate::app_config;

#[derive(Clone, PartialEq)]
pub struct AiAnswer {
    pub loading: bool,
    pub text: Option<String>,
    ask: Callback<Prompt>,
}

impl AiAnswer {
    pub fn ask(&self, prompt: Prompt) {
        self.ask.emit(prompt);
    }
}

/// One generative-text answer at a time. Failures arrive as the prompt's
/// apology text, never as an error.
#[hook]
pub fn use_ai_answer() -> AiAnswer {
    let loading = use_state(|| false);
    let text = use_state(|| None::<String>);
    let spawner = use_scoped_spawner();

    let ask = {
        let loading = loading.clone();
        let text = text.clone();
        Callback::from(move |prompt: Prompt| {
            if *loading {
                return;
            }
            loading.set(true);
            text.set(None);

            let loading = loading.clone();
            let text = text.clone();
            spawner.spawn(async move {
                let client = app_config().genai_client();
                let answer = ask_or_apologize(&client, &prompt).await;
                text.set(Some(answer));
                loading.set(false);
            });
        })
    };

    AiAnswer {
        loading: *loading,
        text: (*text).clone(),
        ask,
    }
}
