use crate::errors::ManifestError;
use crate::manifest;
use crate::options::Options;
use crate::plan::Plan;

const SERVER_DIRS: &[&str] = &[
    "src/controllers",
    "src/routes",
    "src/models",
    "src/middleware",
    "src/config",
    "src/utils",
    "src/validations",
    "src/services",
    "src/constants",
    "src/uploads/images",
    "src/tests/unit",
    "src/tests/integration",
];

pub fn plan(options: &Options, plan: &mut Plan) -> Result<(), ManifestError> {
    for dir in SERVER_DIRS {
        plan.dir(format!("server/{dir}"));
    }

    plan.file("server/src/server.js", server_entry());
    plan.file("server/src/app.js", express_app());
    plan.file("server/src/config/database.js", database_config());
    plan.file("server/src/middleware/auth.js", auth_middleware());
    plan.file("server/src/middleware/errorHandler.js", error_handler());
    plan.file("server/src/models/User.js", user_model());
    plan.file("server/src/models/Post.js", post_model());
    plan.file("server/src/controllers/authController.js", auth_controller());
    plan.file("server/src/controllers/userController.js", user_controller());
    plan.file("server/src/routes/authRoutes.js", auth_routes());
    plan.file("server/src/routes/userRoutes.js", user_routes());
    plan.file("server/src/routes/index.js", routes_index());
    plan.file(
        "server/src/validations/authValidation.js",
        auth_validation(),
    );
    plan.file("server/src/utils/helpers.js", helpers());
    plan.file("server/package.json", manifest::server_package(options)?);
    plan.file("server/.env", env_file());
    plan.file("server/.env.example", env_example());

    Ok(())
}

fn server_entry() -> String {
    r#"const app = require('./app');
const connectDB = require('./config/database');

const PORT = process.env.PORT || 5000;

console.log('Starting MERN Server...');
console.log('Environment:', process.env.NODE_ENV || 'development');

// Connect to MongoDB
connectDB();

const server = app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
  console.log('Client URL: http://localhost:3000');
  console.log('API URL: http://localhost:5000/api');
  console.log('MongoDB URL: mongodb://localhost:27017/mernapp');
});

// Graceful shutdown
process.on('SIGTERM', () => {
  console.log('SIGTERM received, shutting down gracefully');
  server.close(() => {
    console.log('Process terminated');
  });
});

module.exports = server;"#
        .to_string()
}

fn express_app() -> String {
    r#"const express = require('express');
const cors = require('cors');
const helmet = require('helmet');
const morgan = require('morgan');
const routes = require('./routes');

const app = express();

// Middleware
app.use(helmet());
app.use(cors());
app.use(morgan('combined'));
app.use(express.json());

// Routes
app.use('/api', routes);

// Health check
app.get('/health', (req, res) => {
  res.status(200).json({ status: 'OK' });
});

// 404 handler
app.use('*', (req, res) => {
  res.status(404).json({ message: 'Route not found' });
});

// Error handling
app.use(require('./middleware/errorHandler'));

module.exports = app;"#
        .to_string()
}

fn database_config() -> String {
    r#"const mongoose = require('mongoose');

const connectDB = async () => {
  try {
    const MONGODB_URI = process.env.MONGODB_URI || 'mongodb://localhost:27017/mernapp';

    console.log('Connecting to MongoDB...');

    const conn = await mongoose.connect(MONGODB_URI, {
      useNewUrlParser: true,
      useUnifiedTopology: true,
    });

    if (conn.connection.readyState === 1) {
      console.log('MongoDB connected successfully');
      console.log('Database Name:', conn.connection.name);
      console.log('Host:', conn.connection.host);
      console.log('Port:', conn.connection.port);
    } else {
      console.log('MongoDB connection failed');
    }

  } catch (error) {
    console.log('MongoDB connection error:', error.message);
    console.log('Make sure:');
    console.log('   - MongoDB is running on localhost:27017');
    console.log('   - MongoDB service is started: sudo systemctl start mongod');
    console.log('   - No other applications are using the same port');
    process.exit(1);
  }
};

// MongoDB connection events
mongoose.connection.on('connected', () => {
  console.log('Mongoose connected to MongoDB');
});

mongoose.connection.on('error', (err) => {
  console.error('Mongoose connection error:', err);
});

mongoose.connection.on('disconnected', () => {
  console.log('Mongoose disconnected from MongoDB');
});

// Graceful shutdown
process.on('SIGINT', async () => {
  await mongoose.connection.close();
  console.log('MongoDB connection closed through app termination');
  process.exit(0);
});

module.exports = connectDB;"#
        .to_string()
}

fn auth_middleware() -> String {
    r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

const auth = async (req, res, next) => {
  try {
    const token = req.header('Authorization')?.replace('Bearer ', '');

    if (!token) {
      return res.status(401).json({ message: 'No token provided' });
    }

    const decoded = jwt.verify(token, process.env.JWT_SECRET);
    const user = await User.findById(decoded.id).select('-password');

    if (!user) {
      return res.status(401).json({ message: 'Token is not valid' });
    }

    req.user = user;
    next();
  } catch (error) {
    res.status(401).json({ message: 'Token is not valid' });
  }
};

module.exports = auth;"#
        .to_string()
}

fn error_handler() -> String {
    r#"const errorHandler = (err, req, res, next) => {
  console.error(err);

  // Mongoose errors
  if (err.name === 'CastError') {
    return res.status(400).json({ message: 'Resource not found' });
  }

  if (err.code === 11000) {
    return res.status(400).json({ message: 'Duplicate field value' });
  }

  if (err.name === 'ValidationError') {
    const messages = Object.values(err.errors).map(val => val.message);
    return res.status(400).json({ message: messages.join(', ') });
  }

  res.status(500).json({ message: 'Server Error' });
};

module.exports = errorHandler;"#
        .to_string()
}

fn user_model() -> String {
    r#"const mongoose = require('mongoose');
const bcrypt = require('bcryptjs');

const userSchema = new mongoose.Schema({
  name: {
    type: String,
    required: true,
    trim: true
  },
  email: {
    type: String,
    required: true,
    unique: true,
    lowercase: true
  },
  password: {
    type: String,
    required: true,
    minlength: 6
  }
}, {
  timestamps: true
});

userSchema.pre('save', async function(next) {
  if (!this.isModified('password')) {
    next();
  }

  const salt = await bcrypt.genSalt(10);
  this.password = await bcrypt.hash(this.password, salt);
});

userSchema.methods.matchPassword = async function(enteredPassword) {
  return await bcrypt.compare(enteredPassword, this.password);
};

module.exports = mongoose.model('User', userSchema);"#
        .to_string()
}

fn post_model() -> String {
    r#"const mongoose = require('mongoose');

const postSchema = new mongoose.Schema({
  title: {
    type: String,
    required: true,
    trim: true
  },
  content: {
    type: String,
    required: true
  },
  author: {
    type: mongoose.Schema.Types.ObjectId,
    ref: 'User',
    required: true
  }
}, {
  timestamps: true
});

module.exports = mongoose.model('Post', postSchema);"#
        .to_string()
}

fn auth_controller() -> String {
    r#"const User = require('../models/User');
const jwt = require('jsonwebtoken');

const generateToken = (id) => {
  return jwt.sign({ id }, process.env.JWT_SECRET, { expiresIn: '30d' });
};

exports.register = async (req, res, next) => {
  try {
    const { name, email, password } = req.body;

    const userExists = await User.findOne({ email });
    if (userExists) {
      return res.status(400).json({ message: 'User already exists' });
    }

    const user = await User.create({ name, email, password });

    res.status(201).json({
      token: generateToken(user._id),
      user: {
        id: user._id,
        name: user.name,
        email: user.email
      }
    });
  } catch (error) {
    next(error);
  }
};

exports.login = async (req, res, next) => {
  try {
    const { email, password } = req.body;

    const user = await User.findOne({ email }).select('+password');
    if (!user || !(await user.matchPassword(password))) {
      return res.status(401).json({ message: 'Invalid credentials' });
    }

    res.json({
      token: generateToken(user._id),
      user: {
        id: user._id,
        name: user.name,
        email: user.email
      }
    });
  } catch (error) {
    next(error);
  }
};

exports.getProfile = async (req, res, next) => {
  try {
    const user = await User.findById(req.user.id);
    res.json({ data: user });
  } catch (error) {
    next(error);
  }
};"#
        .to_string()
}

fn user_controller() -> String {
    r#"exports.getUser = async (req, res, next) => {
  try {
    const user = await User.findById(req.params.id).select('-password');
    if (!user) {
      return res.status(404).json({ message: 'User not found' });
    }
    res.json({ data: user });
  } catch (error) {
    next(error);
  }
};"#
        .to_string()
}

fn auth_routes() -> String {
    r#"const express = require('express');
const { register, login, getProfile } = require('../controllers/authController');
const auth = require('../middleware/auth');

const router = express.Router();

router.post('/register', register);
router.post('/login', login);
router.get('/profile', auth, getProfile);

module.exports = router;"#
        .to_string()
}

fn user_routes() -> String {
    r#"const express = require('express');
const { getUser } = require('../controllers/userController');
const auth = require('../middleware/auth');

const router = express.Router();

router.get('/:id', auth, getUser);

module.exports = router;"#
        .to_string()
}

fn routes_index() -> String {
    r#"const express = require('express');
const authRoutes = require('./authRoutes');
const userRoutes = require('./userRoutes');

const router = express.Router();

router.use('/auth', authRoutes);
router.use('/users', userRoutes);

module.exports = router;"#
        .to_string()
}

fn auth_validation() -> String {
    r#"const { body } = require('express-validator');

exports.validateRegister = [
  body('name').notEmpty().withMessage('Name is required'),
  body('email').isEmail().withMessage('Please include a valid email'),
  body('password').isLength({ min: 6 }).withMessage('Password must be at least 6 characters')
];

exports.validateLogin = [
  body('email').isEmail().withMessage('Please include a valid email'),
  body('password').exists().withMessage('Password is required')
];"#
        .to_string()
}

fn helpers() -> String {
    "exports.asyncHandler = (fn) => (req, res, next) =>\n  Promise.resolve(fn(req, res, next)).catch(next);"
        .to_string()
}

fn env_file() -> String {
    "NODE_ENV=development\nPORT=5000\nMONGODB_URI=mongodb://localhost:27017/mernapp\nJWT_SECRET=your-super-secret-jwt-key-change-this-in-production"
        .to_string()
}

fn env_example() -> String {
    "NODE_ENV=development\nPORT=5000\nMONGODB_URI=your-mongodb-connection-string\nJWT_SECRET=your-jwt-secret-key"
        .to_string()
}
