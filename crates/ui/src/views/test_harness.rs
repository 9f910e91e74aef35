use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::FacetFilter;
use quiz_core::model::QuestionBank;
use services::load_bank;
use storage::CsvRowSource;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizPage;

pub const SAMPLE_CSV: &str = "\
year,category,question,type,option1,option2,option3,answer1,answer2
2023,Math,2+2=?,single,3,4,5,4,
2023,Sets,Pick the vowels,multiple,A,B,E,A,E
2024,Math,3*3=?,single,6,9,12,9,
";

struct TestApp {
    bank: Arc<QuestionBank>,
    selection: FacetFilter,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn bank_origin(&self) -> String {
        "sample.csv".to_string()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        Some(7)
    }

    fn initial_selection(&self) -> FacetFilter {
        self.selection.clone()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizPage {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_quiz_harness(selection: FacetFilter) -> ViewHarness {
    let source = CsvRowSource::from_bytes("sample.csv", SAMPLE_CSV);
    let bank = load_bank(&source).expect("sample bank loads");
    let app = Arc::new(TestApp {
        bank: Arc::new(bank),
        selection,
    });

    let dom = VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app });
    ViewHarness { dom }
}
