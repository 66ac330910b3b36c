/// Skip a test if AWS credentials or the target value are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID not set");
            return;
        }
        if std::env::var("PARAMSCAN_TEST_VALUE").is_err() {
            eprintln!("SKIPPED: PARAMSCAN_TEST_VALUE not set (set to a value stored in the account)");
            return;
        }
    };
}
