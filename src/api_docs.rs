use crate::api;
use crate::domain::{Student, Test, TestResult};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::student::create_student,
        api::student::get_student,
        api::student::list_students,
        api::student::delete_student,
        api::test::create_test,
        api::test::get_test,
        api::test::list_tests,
        api::result::submit_result,
        api::result::get_student_results,
        api::result::get_test_results,
        api::result::get_average_score,
        api::result::get_highest_score,
    ),
    components(
        schemas(
            Student,
            Test,
            TestResult,
            api::MessageResponse,
            api::ErrorResponse,
            api::student::CreateStudentRequest,
            api::test::CreateTestRequest,
            api::result::SubmitResultRequest,
            api::result::AverageScoreResponse,
            api::result::HighestScoreResponse,
        )
    ),
    tags(
        (name = "gradebook", description = "Gradebook API")
    )
)]
pub struct ApiDoc;
