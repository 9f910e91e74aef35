mod quiz_vm;

pub use quiz_vm::{
    ChoiceVm, EMPTY_SELECTION_MESSAGE, OptionVm, QuestionVm, QuizIntent, QuizPageVm, QuizVm,
    map_choices, map_question, score_label, selector_label,
};
