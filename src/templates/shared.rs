use crate::options::Options;
use crate::plan::Plan;

const SHARED_DIRS: &[&str] = &["constants", "utils", "types"];

pub fn plan(options: &Options, plan: &mut Plan) {
    for dir in SHARED_DIRS {
        plan.dir(format!("shared/{dir}"));
    }

    plan.file("shared/constants/appConstants.js", app_constants());

    if options.typescript {
        plan.file("shared/types/index.ts", type_definitions());
    }
}

fn app_constants() -> String {
    r"module.exports = {
  ROLES: {
    USER: 'user',
    ADMIN: 'admin'
  },
  STATUS: {
    ACTIVE: 'active',
    INACTIVE: 'inactive'
  }
};"
    .to_string()
}

fn type_definitions() -> String {
    r"export interface User {
  id: string;
  name: string;
  email: string;
  createdAt: string;
  updatedAt: string;
}

export interface AuthResponse {
  token: string;
  user: User;
}

export interface ApiResponse<T> {
  data: T;
  message?: string;
}"
    .to_string()
}
