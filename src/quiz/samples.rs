//! The quizzes the catalog ships with, so the app is usable without
//! authoring anything first.

use super::{Question, QuestionId, Quiz, OPTION_COUNT};

const SAMPLE_AUTHOR: &str = "demo@example.com";

pub fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new(
            1,
            "General Knowledge Quiz".to_string(),
            SAMPLE_AUTHOR.to_string(),
            vec![
                question(
                    1,
                    "What is the capital of France?",
                    ["London", "Berlin", "Paris", "Madrid"],
                    2,
                ),
                question(
                    2,
                    "Which planet is known as the Red Planet?",
                    ["Venus", "Mars", "Jupiter", "Saturn"],
                    1,
                ),
                question(
                    3,
                    "What is the largest ocean on Earth?",
                    [
                        "Atlantic Ocean",
                        "Indian Ocean",
                        "Arctic Ocean",
                        "Pacific Ocean",
                    ],
                    3,
                ),
                question(
                    4,
                    "Who painted the Mona Lisa?",
                    ["Van Gogh", "Picasso", "Leonardo da Vinci", "Michelangelo"],
                    2,
                ),
                question(
                    5,
                    "What is the tallest mountain in the world?",
                    ["K2", "Mount Everest", "Kangchenjunga", "Mont Blanc"],
                    1,
                ),
            ],
        ),
        Quiz::new(
            2,
            "Math Basics Quiz".to_string(),
            SAMPLE_AUTHOR.to_string(),
            vec![
                question(1, "What is 5 + 7?", ["10", "11", "12", "13"], 2),
                question(2, "What is 9 x 8?", ["63", "72", "81", "64"], 1),
                question(
                    3,
                    "What is the square root of 144?",
                    ["10", "11", "12", "14"],
                    2,
                ),
                question(
                    4,
                    "What is 100 divided by 4?",
                    ["20", "25", "30", "15"],
                    1,
                ),
                question(5, "What is 15% of 200?", ["25", "30", "35", "40"], 1),
            ],
        ),
        Quiz::new(
            3,
            "Science Quiz".to_string(),
            SAMPLE_AUTHOR.to_string(),
            vec![
                question(
                    1,
                    "What gas do plants absorb from the air?",
                    ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
                    2,
                ),
                question(
                    2,
                    "What is H2O commonly known as?",
                    ["Salt", "Sugar", "Water", "Oil"],
                    2,
                ),
                question(
                    3,
                    "How many bones are in the adult human body?",
                    ["186", "206", "226", "256"],
                    1,
                ),
                question(
                    4,
                    "What is the chemical symbol for Gold?",
                    ["Go", "Gd", "Au", "Ag"],
                    2,
                ),
                question(
                    5,
                    "Which organ pumps blood through the body?",
                    ["Brain", "Lungs", "Heart", "Liver"],
                    2,
                ),
            ],
        ),
        Quiz::new(
            4,
            "History Quiz".to_string(),
            SAMPLE_AUTHOR.to_string(),
            vec![
                question(
                    1,
                    "In which year did World War II end?",
                    ["1943", "1944", "1945", "1946"],
                    2,
                ),
                question(
                    2,
                    "Who was the first President of the United States?",
                    [
                        "Abraham Lincoln",
                        "George Washington",
                        "Thomas Jefferson",
                        "John Adams",
                    ],
                    1,
                ),
                question(
                    3,
                    "Which ancient civilization built the pyramids?",
                    ["Romans", "Greeks", "Egyptians", "Mayans"],
                    2,
                ),
                question(
                    4,
                    "The Great Wall was built in which country?",
                    ["Japan", "India", "China", "Korea"],
                    2,
                ),
                question(
                    5,
                    "Who discovered America in 1492?",
                    [
                        "Vasco da Gama",
                        "Christopher Columbus",
                        "Marco Polo",
                        "Ferdinand Magellan",
                    ],
                    1,
                ),
            ],
        ),
        Quiz::new(
            5,
            "Geography Quiz".to_string(),
            SAMPLE_AUTHOR.to_string(),
            vec![
                question(
                    1,
                    "Which is the largest country by area?",
                    ["Canada", "China", "USA", "Russia"],
                    3,
                ),
                question(
                    2,
                    "What is the longest river in the world?",
                    ["Amazon", "Nile", "Yangtze", "Mississippi"],
                    1,
                ),
                question(
                    3,
                    "Which continent has the most countries?",
                    ["Asia", "Europe", "Africa", "South America"],
                    2,
                ),
                question(
                    4,
                    "What is the smallest country in the world?",
                    ["Monaco", "San Marino", "Vatican City", "Liechtenstein"],
                    2,
                ),
                question(
                    5,
                    "Which desert is the largest in the world?",
                    ["Gobi", "Kalahari", "Sahara", "Arabian"],
                    2,
                ),
            ],
        ),
        Quiz::new(
            6,
            "Riddle Quiz".to_string(),
            SAMPLE_AUTHOR.to_string(),
            vec![
                question(
                    1,
                    "I speak without a mouth and hear without ears. I have nobody, but I come alive with wind. What am I?",
                    ["Echo", "Shadow", "Fire", "Silence"],
                    0,
                ),
                question(
                    2,
                    "I'm tall when I'm young, and I'm short when I'm old. What am I?",
                    ["Tree", "Pencil", "Candle", "Person"],
                    2,
                ),
                question(
                    3,
                    "What has keys but can't open locks?",
                    ["Map", "Piano", "Keyboard", "Locksmith"],
                    1,
                ),
                question(
                    4,
                    "What gets wetter as it dries?",
                    ["Sponge", "Towel", "Rain", "Soap"],
                    1,
                ),
                question(
                    5,
                    "What can travel around the world while staying in a corner?",
                    ["Stamp", "Sunlight", "Wind", "Sound"],
                    0,
                ),
            ],
        ),
    ]
}

fn question(
    id: QuestionId,
    text: &str,
    options: [&str; OPTION_COUNT],
    correct_option: usize,
) -> Question {
    Question::new(
        id,
        text.to_string(),
        options.map(|option| option.to_string()),
        correct_option,
    )
}
