//! Prompt builders for the plan-generation chain. Wording is part of the
//! contract: each step embeds the previous step's reply verbatim.

use crate::config::PromptStyle;
use crate::student::Student;

fn student_background(student: &Student) -> String {
    format!(
        "Student Background:\n\
         - Department: {}\n\
         - Degree Level: {}\n\
         - Prior Courses: {}",
        student.department,
        student.degree_level,
        student.prior_courses_text()
    )
}

pub(crate) fn knowledge_assessment_prompt(student: &Student, target_course: &str) -> String {
    format!(
        "You are an academic advisor assessing a student's current knowledge.\n\n\
         {background}\n\n\
         Based solely on this information, provide a detailed assessment of what this \
         student likely knows that is relevant to {target_course}.\n\n\
         Focus on:\n\
         - Mathematical foundations they likely have\n\
         - Programming skills they've developed\n\
         - Domain-specific knowledge from their field\n\
         - Relevant concepts they've been exposed to through their prior courses\n\n\
         Format your response as a structured assessment with clear sections. \
         Be specific and comprehensive.",
        background = student_background(student),
    )
}

pub(crate) fn gap_analysis_prompt(
    student: &Student,
    target_course: &str,
    knowledge_assessment: &str,
    catalog_listing: &str,
) -> String {
    format!(
        "You are an academic advisor identifying knowledge gaps for a student.\n\n\
         {background}\n\n\
         Target Course: {target_course}\n\n\
         Previous Knowledge Assessment:\n\
         {knowledge_assessment}\n\n\
         Available courses in the catalog:\n\
         {catalog_listing}\n\n\
         Based on the knowledge assessment and the requirements for {target_course}, \
         identify specific knowledge and skill gaps this student needs to address. Consider:\n\
         - Mathematical prerequisites\n\
         - Programming skills and frameworks\n\
         - Theoretical foundations\n\
         - Practical experience needed\n\n\
         Format your response as a clear list of specific gaps that need to be addressed.",
        background = student_background(student),
    )
}

pub(crate) fn course_selection_prompt(
    student: &Student,
    target_course: &str,
    knowledge_assessment: &str,
    gap_analysis: &str,
    catalog_listing: &str,
) -> String {
    format!(
        "You are an academic advisor selecting courses to fill specific knowledge gaps.\n\n\
         {background}\n\n\
         Target Course: {target_course}\n\n\
         Knowledge Assessment:\n\
         {knowledge_assessment}\n\n\
         Identified Gaps:\n\
         {gap_analysis}\n\n\
         Available courses in the catalog:\n\
         {catalog_listing}\n\n\
         Based on the identified knowledge gaps, select specific courses from the catalog \
         that would best prepare this student for {target_course}. For each recommended course:\n\
         1. Explain exactly which gap(s) it addresses\n\
         2. Justify why this specific course is appropriate given the student's background\n\
         3. Indicate if it's essential or optional\n\n\
         If the student appears ready to take {target_course} directly, state this clearly \
         with justification.\n\n\
         Format your response as a structured list of course recommendations with clear \
         explanations.",
        background = student_background(student),
    )
}

pub(crate) fn rag_course_selection_prompt(
    student: &Student,
    target_course: &str,
    knowledge_assessment: &str,
    gap_analysis: &str,
    catalog_listing: &str,
    catalog_context: &str,
) -> String {
    format!(
        "You are an academic advisor selecting courses to fill specific knowledge gaps.\n\n\
         {background}\n\n\
         Target Course: {target_course}\n\n\
         Knowledge Assessment:\n\
         {knowledge_assessment}\n\n\
         Identified Gaps:\n\
         {gap_analysis}\n\n\
         Available courses in the catalog:\n\
         {catalog_listing}\n\n\
         Relevant Information from Engineering Catalog:\n\
         {catalog_context}\n\n\
         Based on the identified knowledge gaps AND the information from the actual \
         engineering catalog, select specific courses that would best prepare this student \
         for {target_course}.\n\n\
         For each recommended course:\n\
         1. Verify it exists in the catalog data\n\
         2. Explain exactly which gap(s) it addresses\n\
         3. Justify why this specific course is appropriate given the student's background\n\
         4. Indicate if it's essential or optional\n\
         5. Note any prerequisites for the recommended course\n\n\
         If the student appears ready to take {target_course} directly, state this clearly \
         with justification.\n\n\
         Format your response as a structured list of course recommendations with clear \
         explanations.",
        background = student_background(student),
    )
}

pub(crate) fn final_plan_prompt(
    student: &Student,
    target_course: &str,
    knowledge_assessment: &str,
    gap_analysis: &str,
    course_selection: &str,
) -> String {
    format!(
        "You are an academic advisor creating a complete learning plan for a student.\n\n\
         {background}\n\n\
         Target Course: {target_course}\n\n\
         Knowledge Assessment:\n\
         {knowledge_assessment}\n\n\
         Identified Gaps:\n\
         {gap_analysis}\n\n\
         Course Recommendations:\n\
         {course_selection}\n\n\
         Using all of this information, create a comprehensive learning plan for this \
         student to successfully prepare for and complete {target_course}. Your plan \
         should include:\n\n\
         ## Current Knowledge Assessment\n\
         [Summarize the student's current relevant knowledge]\n\n\
         ## Knowledge Gaps for {target_course}\n\
         [Summarize the key gaps that need to be addressed]\n\n\
         ## Recommended Learning Path\n\
         [Provide a sequential path of courses and learning activities]\n\n\
         ## Additional Resources\n\
         [Suggest supplementary materials, online resources, or self-study topics]\n\n\
         ## Timeline\n\
         [Recommend a realistic timeline for completing the preparation and target course]\n\n\
         Make your plan specific, actionable, and tailored to this student's unique \
         background and needs.",
        background = student_background(student),
    )
}

const WORKED_EXAMPLE: &str = "Here is an example of a strong learning plan for a different \
student (Mathematics department, Undergraduate, prior courses: Calculus I, Calculus II) \
preparing for Machine Learning:\n\
1. Take a programming fundamentals course to build coding skills.\n\
2. Take a data structures course to support algorithmic work.\n\
3. Take an introductory data science course before the target course.\n\
Timeline: three semesters, one preparatory course per semester.";

const STEP_BY_STEP_INSTRUCTION: &str = "Think through this step by step: first assess what \
the student already knows, then identify the knowledge gaps for the target course, then \
select catalog courses that close those gaps, and only then write the plan.";

pub(crate) fn single_shot_prompt(
    student: &Student,
    target_course: &str,
    catalog_listing: &str,
    style: PromptStyle,
) -> String {
    let style_block = match style {
        PromptStyle::Plain => String::new(),
        PromptStyle::WorkedExamples => format!("{WORKED_EXAMPLE}\n\n"),
        PromptStyle::StepByStep => format!("{STEP_BY_STEP_INSTRUCTION}\n\n"),
    };

    format!(
        "You are an academic advisor creating a learning plan for a student.\n\n\
         {background}\n\n\
         Target Course: {target_course}\n\n\
         Available courses in the catalog:\n\
         {catalog_listing}\n\n\
         {style_block}\
         Create a comprehensive learning plan that prepares this student for \
         {target_course}. Recommend specific courses from the catalog in the order they \
         should be taken, explain why each course is needed, and suggest a realistic \
         timeline.",
        background = student_background(student),
    )
}
