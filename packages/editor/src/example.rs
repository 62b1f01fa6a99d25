//! Built-in example roadmap loaded by the "load example" button

pub const EXAMPLE_TITLE: &str = "How To Start a Startup";

pub const EXAMPLE_DATE_FORMAT: &str = "2006-01-02";

pub const EXAMPLE_BASE_URL: &str = "https://example.com/foo";

pub const EXAMPLE_ROADMAP: &str = concat!(
    "Find the idea [2019-07-20, 2020-01-20, 100%]\n",
    "\tLook for things missing in life\n",
    "\tFormalize your idea, run thought experiments [https://example.com/initial-plans]\n",
    "\tSurvey friends, potential users or customers [https://example.com/survey-results]\n",
    "\tGo back to the drawing board [https://example.com/reworked-plans]\n",
    "Validate the idea [2020-01-21, 2020-04-20]\n",
    "\tMake a prototype #1 [2020-01-21, 2020-04-10, 100%, TCK-1, https://github.com/peteraba/roadmapper, |1]\n",
    "\tShow the prototype to 100 people #1 [2020-04-11, 2020-04-20, 80%, TCK-123]\n",
    "\tAnalyse results [2020-04-21, 2020-05-05]\n",
    "\tImprove prototype [2020-05-06, 2020-06-06]\n",
    "\tShow the prototype to 100 people #2 [2020-06-07, 2020-06-16]\n",
    "\tAnalyse results [2020-06-16, 2020-06-30]\n",
    "\tImprove prototype [2020-07-01, 2020-07-16]\n",
    "\tShow the prototype to 100 people #2 [2020-07-17, 2020-07-25]\n",
    "Start a business\n",
    "\tLearn about your options about various company types [2019-07-20, 2020-08-31]\n",
    "\tLearn about your options for managing equity [2019-07-20, 2020-08-01]\n",
    "\tFind a co-founder [2020-04-20, 2020-08-31]\n",
    "\tRegister your business [2020-08-01, 2020-09-30, |2]\n",
    "\tLook for funding [2020-08-01, 2020-10-31]\n",
    "\tBuild a team [2020-11-01, 2020-12-15]\n",
    "Build version one [2021-01-01, 2021-04-15]\n",
    "\tBuild version one [2021-01-01, 2021-03-31]\n",
    "\tLaunch [2021-04-01, 2021-04-15, |3]\n",
    "Grow [2021-04-16, 2021-12-31]\n",
    "\tFollow up with users\n",
    "\tIterate / Pivot\n",
    "\tLaunch again\n",
    "\tGet to 1,000 users\n",
    "\tPlan next steps\n",
    "\n",
    "|Create the first prototype\n",
    "|Start your business\n",
    "|Lunch version one",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_indentation_errors;

    #[test]
    fn test_example_is_valid() {
        assert!(find_indentation_errors(EXAMPLE_ROADMAP).is_empty());
        assert_eq!(EXAMPLE_ROADMAP.lines().count(), 34);
    }
}
