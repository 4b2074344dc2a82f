/// Asks for a micro-course in the lesson grammar (`### Lesson <n>: <title>`).
pub fn compose_lesson_prompt(topic: &str) -> String {
    format!(
        "Create a micro-course about {topic} with 3 to 5 lessons. For each lesson:
- Title (format as '### Lesson [number]: [title]')
- 3 to 5 bullet points
- A short 2-sentence summary
Keep the language simple and beginner-friendly."
    )
}

/// Asks for exactly five questions in the six-line quiz grammar.
pub fn compose_quiz_prompt(topic: &str, content: &str) -> String {
    let source = if content.trim().is_empty() {
        format!("the topic \"{topic}\"")
    } else {
        format!("the following micro-course about \"{topic}\":\n\n{content}\n")
    };

    format!(
        "Create a multiple-choice quiz based on {source}
Write exactly 5 questions. Use exactly this format for every question and separate questions with a blank line:

Q1. [question text]
A) [option]
B) [option]
C) [option]
D) [option]
Answer: [correct letter]

Do not add explanations or any other text."
    )
}

/// Static course shown when the provider cannot be reached.
pub fn fallback_course(topic: &str) -> String {
    format!(
        "### Lesson 1: Getting Started with {topic}
- Find out what {topic} is and where it is used
- Learn the core vocabulary
- Identify a good beginner resource
Summary: Every subject starts with its vocabulary. Spend a little time on the basic terms before going deeper.

### Lesson 2: Core Concepts of {topic}
- Break the subject into a few key ideas
- Study one idea at a time
- Write down examples for each idea
Summary: Small steps make big subjects manageable. Examples turn abstract ideas into something you can remember.

### Lesson 3: Practicing {topic}
- Apply what you learned to a small project or exercise
- Review your mistakes
- Teach the idea to someone else
Summary: Practice is where understanding becomes skill. Explaining a concept is the best test of knowing it."
    )
}

/// Static quiz in the quiz grammar, used with [`fallback_course`].
pub fn fallback_quiz(topic: &str) -> String {
    format!(
        "Q1. What is the best first step when learning {topic}?
A) Memorizing advanced details
B) Learning the core vocabulary
C) Skipping the basics
D) Avoiding examples
Answer: B

Q2. How should a large subject be studied?
A) All at once
B) Only by reading summaries
C) One key idea at a time
D) Without taking notes
Answer: C

Q3. What turns abstract ideas into something memorable?
A) Concrete examples
B) Longer definitions
C) Fewer study sessions
D) Ignoring mistakes
Answer: A

Q4. What is a good way to practice {topic}?
A) Reading the same page repeatedly
B) Avoiding exercises
C) Waiting until you know everything
D) Applying it to a small project
Answer: D

Q5. Which activity best tests your understanding?
A) Skimming headlines
B) Explaining the idea to someone else
C) Copying notes
D) Guessing answers
Answer: B"
    )
}
