//! Property tests for the sparse update body

use proptest::prelude::*;
use serde_json::Value;
use FormBridge::models::UpdateUserRequest;

fn field() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z0-9@. ]{1,12}"]
}

proptest! {
    #[test]
    fn body_has_exactly_the_filled_keys(
        first_name in field(),
        last_name in field(),
        email in field(),
        new_password in field(),
        current_password in field(),
        is_active in any::<bool>(),
    ) {
        let request = UpdateUserRequest::from_form(
            &first_name, &last_name, &email, &new_password, &current_password, is_active,
        );
        let body = serde_json::to_value(&request).unwrap();
        let object = body.as_object().unwrap();

        prop_assert_eq!(object.get("is_active"), Some(&Value::Bool(is_active)));
        prop_assert_eq!(object.contains_key("first_name"), !first_name.is_empty());
        prop_assert_eq!(object.contains_key("last_name"), !last_name.is_empty());
        prop_assert_eq!(object.contains_key("email"), !email.is_empty());

        // the two password keys travel together, keyed on the new password
        prop_assert_eq!(object.contains_key("new_password"), !new_password.is_empty());
        prop_assert_eq!(object.contains_key("new_password"), object.contains_key("current_password"));

        let expected_keys = 1
            + usize::from(!first_name.is_empty())
            + usize::from(!last_name.is_empty())
            + usize::from(!email.is_empty())
            + 2 * usize::from(!new_password.is_empty());
        prop_assert_eq!(object.len(), expected_keys);
    }
}
