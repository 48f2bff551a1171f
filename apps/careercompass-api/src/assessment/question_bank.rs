//! Built-in multiple-choice question bank, keyed by skill and difficulty.
//!
//! Answer keys never leave this module except through grading; the public
//! `QuizQuestion` view carries no correct index.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct BankQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`.
    pub correct: usize,
    pub topic: &'static str,
}

pub struct QuestionSet {
    pub skill_name: &'static str,
    pub difficulty: Difficulty,
    pub questions: &'static [BankQuestion],
}

/// Question as served to the learner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub difficulty_level: Difficulty,
    pub skill_tested: String,
    pub topic: String,
}

impl QuestionSet {
    pub fn public_questions(&self) -> Vec<QuizQuestion> {
        self.questions
            .iter()
            .map(|q| QuizQuestion {
                id: q.id.to_string(),
                text: q.text.to_string(),
                options: q.options.iter().map(|o| o.to_string()).collect(),
                difficulty_level: self.difficulty,
                skill_tested: self.skill_name.to_string(),
                topic: q.topic.to_string(),
            })
            .collect()
    }
}

/// Exact skill-name match; `None` when the bank has nothing for the pair.
pub fn question_set(skill_name: &str, difficulty: Difficulty) -> Option<&'static QuestionSet> {
    QUESTION_BANK
        .iter()
        .find(|set| set.skill_name == skill_name && set.difficulty == difficulty)
}

/// Skills in the bank with the difficulties each one offers, in bank order.
pub fn available_quizzes() -> Vec<(&'static str, Vec<Difficulty>)> {
    let mut out: Vec<(&'static str, Vec<Difficulty>)> = Vec::new();
    for set in QUESTION_BANK {
        match out.iter_mut().find(|(skill, _)| *skill == set.skill_name) {
            Some((_, levels)) => levels.push(set.difficulty),
            None => out.push((set.skill_name, vec![set.difficulty])),
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Bank contents
// ────────────────────────────────────────────────────────────────────────────

pub static QUESTION_BANK: &[QuestionSet] = &[
    QuestionSet {
        skill_name: "Python",
        difficulty: Difficulty::Beginner,
        questions: &[
            BankQuestion {
                id: "q_py_b_1",
                text: "What is the output of print(2 ** 3)?",
                options: &["6", "8", "9", "5"],
                correct: 1,
                topic: "Basic Operations",
            },
            BankQuestion {
                id: "q_py_b_2",
                text: "Which of the following is a valid variable name in Python?",
                options: &["2var", "var-name", "var_name", "var name"],
                correct: 2,
                topic: "Variables",
            },
            BankQuestion {
                id: "q_py_b_3",
                text: "What is the result of 'hello'.upper()?",
                options: &["hello", "HELLO", "'HELLO'", "Error"],
                correct: 1,
                topic: "String Methods",
            },
            BankQuestion {
                id: "q_py_b_4",
                text: "What does len([1, 2, 3, 4]) return?",
                options: &["3", "4", "5", "Error"],
                correct: 1,
                topic: "Lists",
            },
            BankQuestion {
                id: "q_py_b_5",
                text: "Which keyword is used to create a function in Python?",
                options: &["function", "def", "define", "func"],
                correct: 1,
                topic: "Functions",
            },
            BankQuestion {
                id: "q_py_b_6",
                text: "What type is the value None in Python?",
                options: &["NoneType", "Null", "Zero", "Empty"],
                correct: 0,
                topic: "Data Types",
            },
            BankQuestion {
                id: "q_py_b_7",
                text: "How do you create a dictionary in Python?",
                options: &["{}", "[]", "()", "{}with keys"],
                correct: 0,
                topic: "Dictionaries",
            },
            BankQuestion {
                id: "q_py_b_8",
                text: "What is the output of list(range(3))?",
                options: &["[1, 2, 3]", "[0, 1, 2]", "[0, 1, 2, 3]", "[3]"],
                correct: 1,
                topic: "Loops",
            },
        ],
    },
    QuestionSet {
        skill_name: "Python",
        difficulty: Difficulty::Intermediate,
        questions: &[
            BankQuestion {
                id: "q_py_i_1",
                text: "What is the purpose of *args in a function?",
                options: &[
                    "Fixed arguments",
                    "Variable length argument list",
                    "Keyword arguments",
                    "Default arguments",
                ],
                correct: 1,
                topic: "Function Arguments",
            },
            BankQuestion {
                id: "q_py_i_2",
                text: "What does a list comprehension do?",
                options: &[
                    "Compresses lists",
                    "Creates a list in a concise way",
                    "Copies lists",
                    "Sorts lists",
                ],
                correct: 1,
                topic: "List Comprehensions",
            },
            BankQuestion {
                id: "q_py_i_3",
                text: "What is the output of [i for i in range(3)]?",
                options: &["[1, 2, 3]", "[0, 1, 2]", "[0, 1, 2, 3]", "Error"],
                correct: 1,
                topic: "List Comprehensions",
            },
            BankQuestion {
                id: "q_py_i_4",
                text: "Which statement creates an iterator object in Python?",
                options: &["iter()", "iterator()", "next()", "iterate()"],
                correct: 0,
                topic: "Iterators",
            },
            BankQuestion {
                id: "q_py_i_5",
                text: "What does the 'with' statement do?",
                options: &[
                    "Creates scope",
                    "Manages resources",
                    "Imports modules",
                    "Defines classes",
                ],
                correct: 1,
                topic: "Context Managers",
            },
        ],
    },
    QuestionSet {
        skill_name: "Python",
        difficulty: Difficulty::Advanced,
        questions: &[
            BankQuestion {
                id: "q_py_a_1",
                text: "What is a metaclass in Python?",
                options: &[
                    "A subclass of a class",
                    "A class whose instances are classes",
                    "A superclass",
                    "An abstract class",
                ],
                correct: 1,
                topic: "Metaclasses",
            },
            BankQuestion {
                id: "q_py_a_2",
                text: "What is the GIL in Python?",
                options: &[
                    "Global Interface Language",
                    "Global Interpreter Lock",
                    "Global Iteration Library",
                    "Global Integer Limit",
                ],
                correct: 1,
                topic: "Threading",
            },
            BankQuestion {
                id: "q_py_a_3",
                text: "How does Python's garbage collection work?",
                options: &[
                    "Manual cleanup",
                    "Reference counting",
                    "Mark and sweep",
                    "Both B and C",
                ],
                correct: 3,
                topic: "Memory Management",
            },
        ],
    },
    QuestionSet {
        skill_name: "Data Science",
        difficulty: Difficulty::Beginner,
        questions: &[
            BankQuestion {
                id: "q_ds_b_1",
                text: "What does 'DataFrame' refer to in Pandas?",
                options: &[
                    "A picture frame",
                    "A 2D labeled data structure",
                    "A reference frame",
                    "A data frame rate",
                ],
                correct: 1,
                topic: "Pandas",
            },
            BankQuestion {
                id: "q_ds_b_2",
                text: "What is NumPy primarily used for?",
                options: &[
                    "Numerical computing",
                    "Web development",
                    "GUI design",
                    "Database management",
                ],
                correct: 0,
                topic: "NumPy",
            },
        ],
    },
    QuestionSet {
        skill_name: "Data Science",
        difficulty: Difficulty::Intermediate,
        questions: &[BankQuestion {
            id: "q_ds_i_1",
            text: "What is cross-validation used for?",
            options: &[
                "Data cleaning",
                "Model evaluation",
                "Feature scaling",
                "Data augmentation",
            ],
            correct: 1,
            topic: "Model Evaluation",
        }],
    },
    QuestionSet {
        skill_name: "Data Science",
        difficulty: Difficulty::Advanced,
        questions: &[BankQuestion {
            id: "q_ds_a_1",
            text: "What is the difference between bias and variance?",
            options: &[
                "Bias is good, variance is bad",
                "They are the same",
                "Bias-variance tradeoff in model complexity",
                "Bias is for regression, variance is for classification",
            ],
            correct: 2,
            topic: "Model Selection",
        }],
    },
    QuestionSet {
        skill_name: "JavaScript",
        difficulty: Difficulty::Beginner,
        questions: &[
            BankQuestion {
                id: "q_js_b_1",
                text: "What does 'DOM' stand for?",
                options: &[
                    "Document Object Model",
                    "Display Object Module",
                    "Data Organization Method",
                    "Digital Output Manager",
                ],
                correct: 0,
                topic: "DOM",
            },
            BankQuestion {
                id: "q_js_b_2",
                text: "How do you declare a variable in modern JavaScript?",
                options: &["var", "let", "const", "All of the above"],
                correct: 3,
                topic: "Variables",
            },
        ],
    },
    QuestionSet {
        skill_name: "JavaScript",
        difficulty: Difficulty::Intermediate,
        questions: &[BankQuestion {
            id: "q_js_i_1",
            text: "What are Promises in JavaScript?",
            options: &[
                "Variables that promise values",
                "Objects for asynchronous operations",
                "Guarantees about code execution",
                "Future values",
            ],
            correct: 1,
            topic: "Async Programming",
        }],
    },
    QuestionSet {
        skill_name: "Web Development",
        difficulty: Difficulty::Beginner,
        questions: &[BankQuestion {
            id: "q_web_b_1",
            text: "What does HTML stand for?",
            options: &[
                "Hyper Text Markup Language",
                "High Tech Modern Language",
                "Home Tool Markup Language",
                "Hyperlinks and Text Markup Language",
            ],
            correct: 0,
            topic: "HTML Basics",
        }],
    },
    QuestionSet {
        skill_name: "Machine Learning",
        difficulty: Difficulty::Beginner,
        questions: &[BankQuestion {
            id: "q_ml_b_1",
            text: "What is supervised learning?",
            options: &[
                "Learning with a teacher",
                "Learning with labeled data",
                "Learning without data",
                "Learning in groups",
            ],
            correct: 1,
            topic: "ML Basics",
        }],
    },
];
