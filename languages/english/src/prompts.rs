//! Fixed prompt texts. Each asks for a two-column `Field | Value` table
//! whose field names match `snap_core::fields::names`.

pub fn define_word(word: &str) -> String {
    format!(
        r#"Provide a detailed definition for the word "{word}". Respond in a table format as follows:

| Field            | Value                                                  |
|------------------|--------------------------------------------------------|
| Definition       | A brief and detailed definition of the word.           |
| Part of Speech   | The part of speech for the word (e.g., noun, verb).    |
| Synonyms         | synonym1, synonym2, synonym3                           |
| Example Sentence | A sentence demonstrating the usage of the word.        |
"#
    )
}

pub const RANDOM_QUOTE: &str = r#"Generate a motivational or inspirational quote that is unique, diverse, and not overused. Draw on a wide range of sources: speeches, books, movies, music lyrics, interviews, and statements by historical figures. Respond in a table format as follows:

| Field        | Value                                                                      |
|--------------|----------------------------------------------------------------------------|
| Quote        | "The exact quote, enclosed in quotation marks."                            |
| Author       | The full name of the person who said or wrote the quote.                   |
| Source Type  | The type of source (e.g., Speech, Book, Movie, Music, Historical Figure).  |
| Context      | Where the quote comes from, including the title of the work and the year.  |
"#;

pub const RANDOM_KNOWLEDGE: &str = r#"Generate a random piece of knowledge or trivia that is unique and interesting. Draw on scientific facts, historical events, cultural information, and general trivia. Respond in a table format as follows:

| Field        | Value                                                                   |
|--------------|-------------------------------------------------------------------------|
| Knowledge    | "The exact piece of knowledge or trivia, enclosed in quotation marks."  |
| Source       | The source of the knowledge or trivia.                                  |
| Context      | A brief explanation of the context or background of the knowledge.      |
"#;

pub const RANDOM_BOOK: &str = r#"Pick a random book and provide information about it in a table format as follows:

| Field        | Value                                                  |
|--------------|--------------------------------------------------------|
| Book Title   | The title of the book.                                 |
| Author       | The full name of the author.                           |
| Intro        | A brief introduction and overview of the book.         |
| Excerpt      | An excerpt or a famous passage from the book.          |
"#;
