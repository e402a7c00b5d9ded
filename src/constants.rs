#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Weight of the work grade, in percentage points.
pub const WORK_WEIGHT: u32 = 40;

/// Weight of the activity grade, in percentage points.
pub const ACTIVITY_WEIGHT: u32 = 30;

/// Weight of the exam grade, in percentage points.
pub const EXAM_WEIGHT: u32 = 30;

/// Total the three weights must add up to.
pub const WEIGHT_TOTAL: u32 = 100;

/// Lowest grade accepted for any assessment.
pub const MIN_GRADE: i32 = 0;

/// Highest grade accepted for any assessment.
pub const MAX_GRADE: i32 = 10;

/// Minimum share of the maximum grade, in percent, for a `Strong` status.
pub const STRONG_PERCENT: u32 = 70;

/// Minimum share of the maximum grade, in percent, for a `Borderline` status.
pub const BORDERLINE_PERCENT: u32 = 50;

/// Environment variable holding the tracing level (`error`..`trace`).
pub const LOG_ENV: &str = "CALCMEDIAS_LOG";

/// Environment variable that disables ANSI colors when set to anything.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Form labels and results table captions.
pub mod labels {
    /// Student name column.
    pub const NAME: &str = "Nome do Aluno";
    /// Work grade column.
    pub const WORK: &str = "Trabalho (40%)";
    /// Activity grade column.
    pub const ACTIVITY: &str = "Atividades (30%)";
    /// Exam grade column.
    pub const EXAM: &str = "Prova (30%)";
    /// Header panel of the results table.
    pub const RESULTS_TITLE: &str = "Resultados da Sessão";
    /// Shown instead of the table when nothing has been recorded.
    pub const EMPTY_TITLE: &str = "Nenhum aluno registrado";
    /// Hint shown under the empty state.
    pub const EMPTY_HINT: &str = "Utilize o comando `add` para adicionar registros.";
    /// Singular student count suffix.
    pub const STUDENT: &str = "Aluno";
    /// Plural student count suffix.
    pub const STUDENTS: &str = "Alunos";
}
