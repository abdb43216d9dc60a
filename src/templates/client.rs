use crate::errors::ManifestError;
use crate::manifest;
use crate::options::Options;
use crate::plan::Plan;

/// Directories the client tier always gets, regardless of flags.
const CLIENT_DIRS: &[&str] = &[
    "public",
    "src/components/common/Button",
    "src/components/common/Modal",
    "src/components/common/Loader",
    "src/components/forms/LoginForm",
    "src/components/forms/RegisterForm",
    "src/components/layout/MainLayout",
    "src/components/layout/AuthLayout",
    "src/pages/Home",
    "src/pages/Login",
    "src/pages/Register",
    "src/pages/Dashboard",
    "src/pages/Profile",
    "src/hooks",
    "src/context",
    "src/utils",
    "src/services",
    "src/store/slices",
    "src/styles",
    "src/assets/images",
    "src/constants",
    "src/types",
    "src/validation",
    "src/config",
    "src/router",
];

pub fn plan(options: &Options, plan: &mut Plan) -> Result<(), ManifestError> {
    let ext = options.component_ext();
    let module = options.module_ext();

    for dir in CLIENT_DIRS {
        plan.dir(format!("client/{dir}"));
    }

    plan.file("client/public/index.html", index_html());
    plan.file("client/public/manifest.json", manifest::web_manifest()?);
    plan.file("client/public/robots.txt", robots_txt());

    plan.file(format!("client/src/App.{ext}"), app_component());
    plan.file(format!("client/src/index.{ext}"), index_component());
    plan.file("client/src/App.css", app_css());

    plan.file(
        format!("client/src/components/common/Button/Button.{ext}"),
        button_component(),
    );
    plan.file("client/src/components/common/Button/Button.css", button_css());

    plan.file(format!("client/src/pages/Home/Home.{ext}"), home_page());
    plan.file(format!("client/src/pages/Login/Login.{ext}"), login_page());
    plan.file(
        format!("client/src/pages/Register/Register.{ext}"),
        register_page(),
    );

    plan.file(format!("client/src/services/api.{module}"), api_service());
    plan.file(
        format!("client/src/services/authService.{module}"),
        auth_service(),
    );
    plan.file(format!("client/src/utils/helpers.{module}"), helpers());
    plan.file(
        format!("client/src/context/AuthContext.{ext}"),
        auth_context(),
    );

    if options.redux {
        plan.file(
            format!("client/src/store/store.{module}"),
            store_config(options),
        );
        plan.file(
            format!("client/src/store/slices/authSlice.{module}"),
            auth_slice(),
        );
    }

    plan.file(format!("client/src/router/AppRouter.{ext}"), app_router());
    plan.file(
        format!("client/src/router/ProtectedRoute.{ext}"),
        protected_route(),
    );

    plan.file("client/src/styles/index.css", global_css());
    plan.file(format!("client/src/config/config.{module}"), client_config());

    plan.file("client/package.json", manifest::client_package(options)?);
    plan.file("client/.env.local", env_file());
    plan.file("client/.env.example", env_file());

    if options.typescript {
        plan.file("client/tsconfig.json", tsconfig());
    }

    Ok(())
}

fn index_html() -> String {
    r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <link rel="icon" href="%PUBLIC_URL%/favicon.ico" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta name="theme-color" content="#000000" />
    <meta name="description" content="MERN Stack Application" />
    <title>MERN App</title>
  </head>
  <body>
    <noscript>You need to enable JavaScript to run this app.</noscript>
    <div id="root"></div>
  </body>
</html>"##
        .to_string()
}

fn robots_txt() -> String {
    "User-agent: *\nAllow: /".to_string()
}

fn app_component() -> String {
    r#"import React from 'react';
import { BrowserRouter as Router } from 'react-router-dom';
import { AuthProvider } from './context/AuthContext';
import AppRouter from './router/AppRouter';
import './App.css';

function App() {
  return (
    <AuthProvider>
      <Router>
        <div className="App">
          <AppRouter />
        </div>
      </Router>
    </AuthProvider>
  );
}

export default App;"#
        .to_string()
}

fn index_component() -> String {
    r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import './styles/index.css';
import App from './App';

const root = ReactDOM.createRoot(document.getElementById('root'));
root.render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);"#
    .to_string()
}

fn app_css() -> String {
    ".App {\n  min-height: 100vh;\n}".to_string()
}

fn button_component() -> String {
    r#"import React from 'react';
import './Button.css';

const Button = ({ children, onClick, type = 'button', variant = 'primary', disabled = false, loading = false, className = '' }) => {
  return (
    <button
      type={type}
      className={`btn btn--${variant} ${className} ${loading ? 'btn--loading' : ''}`}
      onClick={onClick}
      disabled={disabled || loading}
    >
      {loading ? 'Loading...' : children}
    </button>
  );
};

export default Button;"#
        .to_string()
}

fn button_css() -> String {
    r##".btn {
  padding: 12px 24px;
  border: none;
  border-radius: 6px;
  font-size: 16px;
  font-weight: 600;
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn--primary {
  background-color: #3b82f6;
  color: white;
}

.btn--primary:hover:not(:disabled) {
  background-color: #2563eb;
}"##
        .to_string()
}

fn home_page() -> String {
    r#"import React from 'react';
import { useAuth } from '../context/AuthContext';

const Home = () => {
  const { user, isAuthenticated } = useAuth();

  return (
    <div className="home">
      <div className="container">
        <h1>Welcome to MERN App</h1>
        {isAuthenticated ? (
          <div>
            <p>Hello, {user?.name}!</p>
            <p>You are successfully logged in.</p>
          </div>
        ) : (
          <div>
            <p>Please log in to access your dashboard.</p>
          </div>
        )}
      </div>
    </div>
  );
};

export default Home;"#
        .to_string()
}

fn login_page() -> String {
    r#"import React, { useState } from 'react';
import { useAuth } from '../context/AuthContext';
import { useNavigate, Link } from 'react-router-dom';

const Login = () => {
  const [formData, setFormData] = useState({
    email: '',
    password: ''
  });
  const [loading, setLoading] = useState(false);
  const { login, error } = useAuth();
  const navigate = useNavigate();

  const handleChange = (e) => {
    setFormData({
      ...formData,
      [e.target.name]: e.target.value
    });
  };

  const handleSubmit = async (e) => {
    e.preventDefault();
    setLoading(true);

    try {
      await login(formData);
      navigate('/dashboard');
    } catch (error) {
      console.error('Login failed:', error);
    } finally {
      setLoading(false);
    }
  };

  return (
    <div className="login-page">
      <div className="login-container">
        <form onSubmit={handleSubmit} className="login-form">
          <h2>Welcome Back</h2>
          <p>Please sign in to your account</p>

          {error && <div className="error-message">{error}</div>}

          <div className="form-group">
            <label htmlFor="email">Email</label>
            <input
              type="email"
              id="email"
              name="email"
              value={formData.email}
              onChange={handleChange}
              required
              placeholder="Enter your email"
            />
          </div>

          <div className="form-group">
            <label htmlFor="password">Password</label>
            <input
              type="password"
              id="password"
              name="password"
              value={formData.password}
              onChange={handleChange}
              required
              placeholder="Enter your password"
            />
          </div>

          <button type="submit" disabled={loading} className="btn btn--primary">
            {loading ? 'Signing in...' : 'Sign In'}
          </button>

          <p className="signup-link">
            Don't have an account? <Link to="/register">Sign up</Link>
          </p>
        </form>
      </div>
    </div>
  );
};

export default Login;"#
        .to_string()
}

fn register_page() -> String {
    r#"import React, { useState } from 'react';
import { useAuth } from '../context/AuthContext';
import { useNavigate, Link } from 'react-router-dom';

const Register = () => {
  const [formData, setFormData] = useState({
    name: '',
    email: '',
    password: '',
    confirmPassword: ''
  });
  const [loading, setLoading] = useState(false);
  const { register, error } = useAuth();
  const navigate = useNavigate();

  const handleChange = (e) => {
    setFormData({
      ...formData,
      [e.target.name]: e.target.value
    });
  };

  const handleSubmit = async (e) => {
    e.preventDefault();
    setLoading(true);

    try {
      await register(formData);
      navigate('/dashboard');
    } catch (error) {
      console.error('Registration failed:', error);
    } finally {
      setLoading(false);
    }
  };

  return (
    <div className="register-page">
      <div className="register-container">
        <form onSubmit={handleSubmit} className="register-form">
          <h2>Create Account</h2>
          <p>Please sign up for a new account</p>

          {error && <div className="error-message">{error}</div>}

          <div className="form-group">
            <label htmlFor="name">Full Name</label>
            <input
              type="text"
              id="name"
              name="name"
              value={formData.name}
              onChange={handleChange}
              required
              placeholder="Enter your full name"
            />
          </div>

          <div className="form-group">
            <label htmlFor="email">Email</label>
            <input
              type="email"
              id="email"
              name="email"
              value={formData.email}
              onChange={handleChange}
              required
              placeholder="Enter your email"
            />
          </div>

          <div className="form-group">
            <label htmlFor="password">Password</label>
            <input
              type="password"
              id="password"
              name="password"
              value={formData.password}
              onChange={handleChange}
              required
              placeholder="Enter your password"
            />
          </div>

          <div className="form-group">
            <label htmlFor="confirmPassword">Confirm Password</label>
            <input
              type="password"
              id="confirmPassword"
              name="confirmPassword"
              value={formData.confirmPassword}
              onChange={handleChange}
              required
              placeholder="Confirm your password"
            />
          </div>

          <button type="submit" disabled={loading} className="btn btn--primary">
            {loading ? 'Creating Account...' : 'Sign Up'}
          </button>

          <p className="login-link">
            Already have an account? <Link to="/login">Sign in</Link>
          </p>
        </form>
      </div>
    </div>
  );
};

export default Register;"#
        .to_string()
}

fn api_service() -> String {
    r#"const API_BASE_URL = process.env.REACT_APP_API_URL || 'http://localhost:5000/api';

class ApiService {
  constructor() {
    this.baseURL = API_BASE_URL;
  }

  async request(endpoint, options = {}) {
    const url = `${this.baseURL}${endpoint}`;
    const token = localStorage.getItem('token');

    const config = {
      headers: {
        'Content-Type': 'application/json',
        ...options.headers,
      },
      ...options,
    };

    if (token) {
      config.headers.Authorization = `Bearer ${token}`;
    }

    if (config.body && typeof config.body === 'object') {
      config.body = JSON.stringify(config.body);
    }

    try {
      const response = await fetch(url, config);
      const data = await response.json();

      if (!response.ok) {
        throw new Error(data.message || 'Something went wrong');
      }

      return data;
    } catch (error) {
      console.error('API Request failed:', error);
      throw error;
    }
  }

  async login(credentials) {
    return this.request('/auth/login', {
      method: 'POST',
      body: credentials,
    });
  }

  async register(userData) {
    return this.request('/auth/register', {
      method: 'POST',
      body: userData,
    });
  }

  async getProfile() {
    return this.request('/users/profile');
  }
}

export default new ApiService();"#
        .to_string()
}

fn auth_service() -> String {
    r"import apiService from './api';

export const authService = {
  login: (credentials) => apiService.login(credentials),
  register: (userData) => apiService.register(userData),
  getProfile: () => apiService.getProfile()
};

export default authService;"
        .to_string()
}

fn helpers() -> String {
    r"export const formatDate = (date) => {
  return new Date(date).toLocaleDateString();
};

export const validateEmail = (email) => {
  const re = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
  return re.test(email);
};

export const getToken = () => {
  return localStorage.getItem('token');
};

export const setToken = (token) => {
  localStorage.setItem('token', token);
};

export const removeToken = () => {
  localStorage.removeItem('token');
};"
    .to_string()
}

fn auth_context() -> String {
    r"import React, { createContext, useState, useContext, useEffect } from 'react';
import authService from '../services/authService';

const AuthContext = createContext();

export const useAuth = () => {
  const context = useContext(AuthContext);
  if (!context) {
    throw new Error('useAuth must be used within an AuthProvider');
  }
  return context;
};

export const AuthProvider = ({ children }) => {
  const [user, setUser] = useState(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState('');

  useEffect(() => {
    checkAuth();
  }, []);

  const checkAuth = async () => {
    try {
      const token = localStorage.getItem('token');
      if (token) {
        const userData = await authService.getProfile();
        setUser(userData.data);
      }
    } catch (error) {
      localStorage.removeItem('token');
    } finally {
      setLoading(false);
    }
  };

  const login = async (credentials) => {
    try {
      setError('');
      const response = await authService.login(credentials);
      localStorage.setItem('token', response.token);
      setUser(response.user);
      return response;
    } catch (error) {
      setError(error.message);
      throw error;
    }
  };

  const register = async (userData) => {
    try {
      setError('');
      const response = await authService.register(userData);
      localStorage.setItem('token', response.token);
      setUser(response.user);
      return response;
    } catch (error) {
      setError(error.message);
      throw error;
    }
  };

  const logout = () => {
    localStorage.removeItem('token');
    setUser(null);
    setError('');
  };

  const value = {
    user,
    loading,
    error,
    login,
    register,
    logout,
    isAuthenticated: !!user,
  };

  return (
    <AuthContext.Provider value={value}>
      {children}
    </AuthContext.Provider>
  );
};

export default AuthContext;"
        .to_string()
}

// The trailing `export type` lines are a syntax error in a plain .js store
// file, so they only appear under the TypeScript flag.
fn store_config(options: &Options) -> String {
    let mut content = r"import { configureStore } from '@reduxjs/toolkit';
import authReducer from './slices/authSlice';

export const store = configureStore({
  reducer: {
    auth: authReducer,
  },
});"
        .to_string();

    if options.typescript {
        content.push_str(
            "\n\nexport type RootState = ReturnType<typeof store.getState>;\nexport type AppDispatch = typeof store.dispatch;",
        );
    }

    content
}

fn auth_slice() -> String {
    r"import { createSlice } from '@reduxjs/toolkit';

const authSlice = createSlice({
  name: 'auth',
  initialState: {
    user: null,
    isAuthenticated: false,
    loading: false,
  },
  reducers: {
    loginStart: (state) => {
      state.loading = true;
    },
    loginSuccess: (state, action) => {
      state.loading = false;
      state.isAuthenticated = true;
      state.user = action.payload;
    },
    loginFailure: (state) => {
      state.loading = false;
    },
    logout: (state) => {
      state.user = null;
      state.isAuthenticated = false;
    },
  },
});

export const { loginStart, loginSuccess, loginFailure, logout } = authSlice.actions;
export default authSlice.reducer;"
        .to_string()
}

fn app_router() -> String {
    r#"import React from 'react';
import { Routes, Route } from 'react-router-dom';
import Home from '../pages/Home/Home';
import Login from '../pages/Login/Login';
import Register from '../pages/Register/Register';
import Dashboard from '../pages/Dashboard/Dashboard';
import Profile from '../pages/Profile/Profile';
import ProtectedRoute from './ProtectedRoute';

const AppRouter = () => {
  return (
    <Routes>
      <Route path="/" element={<Home />} />
      <Route path="/login" element={<Login />} />
      <Route path="/register" element={<Register />} />
      <Route
        path="/dashboard"
        element={
          <ProtectedRoute>
            <Dashboard />
          </ProtectedRoute>
        }
      />
      <Route
        path="/profile"
        element={
          <ProtectedRoute>
            <Profile />
          </ProtectedRoute>
        }
      />
    </Routes>
  );
};

export default AppRouter;"#
        .to_string()
}

fn protected_route() -> String {
    r"import React from 'react';
import { Navigate } from 'react-router-dom';
import { useAuth } from '../context/AuthContext';

const ProtectedRoute = ({ children }) => {
  const { isAuthenticated, loading } = useAuth();

  if (loading) {
    return <div>Loading...</div>;
  }

  return isAuthenticated ? children : <Navigate to='/login' />;
};

export default ProtectedRoute;"
        .to_string()
}

fn global_css() -> String {
    r##"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
    'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
    sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}

.form-group {
  margin-bottom: 1rem;
}

.form-group label {
  display: block;
  margin-bottom: 0.5rem;
}

.form-group input {
  width: 100%;
  padding: 0.5rem;
  border: 1px solid #ddd;
  border-radius: 4px;
}

.error-message {
  color: #e53e3e;
  background: #fed7d7;
  padding: 0.5rem;
  border-radius: 4px;
  margin-bottom: 1rem;
}"##
        .to_string()
}

fn client_config() -> String {
    r"export const config = {
  API_BASE_URL: process.env.REACT_APP_API_URL || 'http://localhost:5000/api',
  APP_NAME: process.env.REACT_APP_NAME || 'MERN App'
};

export default config;"
        .to_string()
}

fn env_file() -> String {
    "REACT_APP_API_URL=http://localhost:5000/api\nREACT_APP_NAME=MERN App".to_string()
}

fn tsconfig() -> String {
    r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["src"]
}"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_config_only_exports_types_under_typescript() {
        let plain = store_config(&Options {
            redux: true,
            ..Options::default()
        });
        assert!(!plain.contains("export type"));

        let typed = store_config(&Options {
            redux: true,
            typescript: true,
            ..Options::default()
        });
        assert!(typed.contains("export type RootState"));
    }

    #[test]
    fn env_local_and_example_match() {
        // both env files carry the same defaults, written verbatim
        assert!(env_file().contains("REACT_APP_API_URL=http://localhost:5000/api"));
    }
}
