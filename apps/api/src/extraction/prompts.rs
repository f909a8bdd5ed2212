// Extraction prompt templates. All prompts for this module live here.

pub const EXTRACTION_SYSTEM: &str = "\
You are a precise resume data extractor. \
Parse resume text into structured project records. \
You MUST respond with a valid JSON array only — no markdown fences, no explanations. \
Never invent projects that are not present in the text.";

pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"The following text was extracted from a resume PDF. Extract every client project it describes.

Segment projects by their date stamps (year YYYY, month MM, optional day DD). For each project extract:
- the company or client name
- the project name or a one-line summary of what the project was
- the main tasks, as an array
- the period, in "YYYY.MM.DD" or "YYYY.MM" format

OUTPUT SCHEMA (return exactly this structure, as a JSON array):
[
  {
    "period": "2025.04.01",
    "company": "company name",
    "projectName": "project name or summary",
    "description": "project description",
    "tasks": ["task 1", "task 2", "task 3"]
  }
]

RULES:
1. period must be "YYYY.MM.DD" or "YYYY.MM". If no date is present, estimate from the nearest date or use "YYYY.01".
2. Extract at least 2 tasks per project when the text supports it.
3. Keep company names and proper nouns exactly as written, including Korean.
4. Return ONLY the JSON array — nothing else, no code fences.

RESUME TEXT:
{resume_text}"#;
