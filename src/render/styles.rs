//! Dashboard stylesheet, served from `/static/style.css`

pub const STYLESHEET: &str = r#":root {
  --primary: #0d6efd;
  --secondary: #6c757d;
  --success: #28a745;
  --info: #17a2b8;
  --warning: #ffc107;
  --danger: #dc3545;
  --light: #f8f9fa;
  --dark: #343a40;
  --bubble: #ff9800;
  --radius: 10px;
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
}

* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--light);
  color: var(--dark);
  font-family: var(--font);
  line-height: 1.5;
}

.app { max-width: 1200px; margin: 0 auto; padding: 24px; }

/* Navigation */
.topbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
.main-header { font-size: 2rem; font-weight: bold; color: var(--primary); margin: 0; }
.user-chip { display: flex; align-items: center; gap: 10px; }
.avatar {
  width: 40px; height: 40px; border-radius: 50%;
  background: var(--primary); color: white;
  display: flex; align-items: center; justify-content: center;
}
.tabs { display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 16px; }
.tab {
  padding: 10px 16px; border-radius: 5px 5px 0 0; border: 1px solid transparent;
  font-weight: 500; text-decoration: none; color: var(--dark);
}
.tab.active { border-bottom: 3px solid var(--primary); }
.dashboard-tab { background: #e9f7ef; border-color: #a6d7b5; }
.tickets-tab { background: #e7f3fe; border-color: #a3cbfd; }
.ki-agent-tab { background: #fff4e6; border-color: #ffdcb0; }
.skill-tree-tab { background: #f4eefe; border-color: #d8c0fd; }
.prognose-tab { background: #e6fafa; border-color: #a0e5e5; }
.profil-tab { background: #feeff5; border-color: #fdb0d0; }

/* Cards */
.card {
  background: white; border-radius: var(--radius); padding: 1rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); margin-bottom: 1rem;
}
.section-header { font-size: 1.5rem; font-weight: bold; margin: 0.5rem 0; }
.row { display: flex; gap: 1rem; align-items: center; }
.grow { flex: 1; }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin: 1rem 0; }
.stat-value { font-size: 2rem; font-weight: bold; color: var(--primary); }
.stat-label { font-size: 1rem; color: var(--secondary); }

/* Progress */
.level-circle {
  width: 80px; height: 80px; border-radius: 50%;
  background: var(--primary); color: white;
  display: flex; align-items: center; justify-content: center;
  font-size: 2.5rem; font-weight: bold;
}
.progress { background: #e9ecef; border-radius: 10px; height: 10px; overflow: hidden; }
.progress-fill { background: var(--primary); height: 100%; }
.progress-caption { display: flex; justify-content: space-between; }
.skill-badge {
  background: var(--bubble); color: white; padding: 0.5rem 1rem;
  border-radius: 5px; margin-bottom: 0.5rem; font-weight: 500;
}

/* Buttons */
.btn {
  border: none; border-radius: 5px; padding: 0.5rem 1rem;
  font-weight: 500; cursor: pointer; width: 100%;
  background: var(--secondary); color: white;
}
.btn-primary { background: var(--primary); }
.btn-row { display: flex; gap: 1rem; margin-top: 0.5rem; }

/* Shop performance */
.shop-row { display: grid; grid-template-columns: 2fr 8fr 1fr; gap: 1rem; align-items: center; margin-bottom: 0.5rem; }
.performance-track { background: #f1f3f4; border-radius: 10px; height: 20px; width: 100%; }
.performance-bar { border-radius: 10px; height: 20px; }

/* Bubble challenge */
.bubble-challenge {
  background: var(--bubble); color: white; padding: 1rem;
  border-radius: var(--radius); margin-bottom: 1rem;
}
.bubble-icon { font-size: 2.5rem; }

/* Chat */
.chat-log { display: flex; flex-direction: column; }
.chat-message { padding: 0.5rem 1rem; border-radius: 10px; margin-bottom: 0.5rem; max-width: 80%; }
.agent-message { background: #f1f3f4; margin-right: auto; }
.user-message { background: #d1e7ff; margin-left: auto; }
.message-time { font-size: 0.8rem; color: var(--secondary); margin-top: 0.2rem; }
.chat-form { display: flex; gap: 1rem; }
.chat-form input { flex: 5; padding: 0.5rem; border: 1px solid #ced4da; border-radius: 5px; }
.chat-form .btn { flex: 1; width: auto; }

/* Ranking */
.ranking-row { display: grid; grid-template-columns: 1fr 3fr 2fr; gap: 1rem; align-items: center; margin-bottom: 0.5rem; }
.rank-circle {
  width: 40px; height: 40px; border-radius: 50%;
  display: flex; align-items: center; justify-content: center; font-weight: bold;
}
.rank-1 { background: var(--primary); color: white; }
.rank-2 { background: var(--secondary); color: white; }
.rank-3 { background: #cd7f32; color: white; }
.rank-4, .rank-5 { background: #e9ecef; color: var(--dark); }
.current-user { font-weight: bold; }

/* Notices */
.notice { padding: 0.75rem 1rem; border-radius: 5px; margin-bottom: 1rem; }
.notice-success { background: #d4edda; color: #155724; }
.notice-info { background: #d1ecf1; color: #0c5460; }
.notice-error { background: #f8d7da; color: #721c24; }
"#;
